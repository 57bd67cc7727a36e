//! Payroll module: employees and the `Payable` capability.
//!
//! Every payable variant can stand in for any other wherever a salary is
//! needed; the payroll run never inspects which variant it holds.

pub mod employee;
pub mod payroll;
pub mod repository;

pub use employee::{Employee, EmployeeId, FullTimeEmployee, Intern, Payable, Vendor};
pub use payroll::{PayrollRun, Payslip, run_payroll};
pub use repository::EmployeeRepository;
