//! Payroll run over any mix of payables.

use serde::{Deserialize, Serialize};

use crate::employee::{EmployeeId, Payable};

/// One line of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    pub employee_id: EmployeeId,
    pub name: String,
    pub salary: u64,
}

impl core::fmt::Display for Payslip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salary: {}", self.salary)
    }
}

/// Result of paying a roster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollRun {
    pub payslips: Vec<Payslip>,
    pub total: u64,
}

/// Compute one payslip per payable, in roster order.
pub fn run_payroll(payables: &[Box<dyn Payable>]) -> PayrollRun {
    let payslips: Vec<Payslip> = payables
        .iter()
        .map(|p| {
            let salary = p.calculate_salary();
            tracing::info!(employee_id = %p.id(), salary, "salary calculated");
            Payslip {
                employee_id: p.id().clone(),
                name: p.name().to_string(),
                salary,
            }
        })
        .collect();

    let total = payslips
        .iter()
        .fold(0u64, |acc, slip| acc.saturating_add(slip.salary));

    PayrollRun { payslips, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{FullTimeEmployee, Intern, Vendor};
    use crate::repository::EmployeeRepository;

    #[test]
    fn pays_the_standard_roster() {
        let run = run_payroll(&EmployeeRepository::payable_employees());

        let lines: Vec<String> = run.payslips.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec!["Salary: 60000", "Salary: 8000", "Salary: 5000000"]
        );
        assert_eq!(run.total, 5_068_000);
    }

    #[test]
    fn empty_roster_pays_nothing() {
        let roster: Vec<Box<dyn Payable>> = Vec::new();
        assert_eq!(run_payroll(&roster), PayrollRun::default());
    }

    #[test]
    fn variants_are_interchangeable() {
        // Same salary, three different variants: the run must not care.
        let roster: Vec<Box<dyn Payable>> = vec![
            Box::new(FullTimeEmployee::new("a", "F1", 700, 300)),
            Box::new(Intern::new("b", "I1", 1_000)),
            Box::new(Vendor::new("c", "V1", 1_000)),
        ];

        let run = run_payroll(&roster);
        assert!(run.payslips.iter().all(|s| s.salary == 1_000));
        assert_eq!(run.payslips[1].employee_id, EmployeeId::new("I1"));
        assert_eq!(run.total, 3_000);
    }

    #[test]
    fn payslip_serializes_id_as_string() {
        let slip = Payslip {
            employee_id: EmployeeId::new("F001"),
            name: "Alice".to_string(),
            salary: 60_000,
        };
        let json = serde_json::to_value(&slip).unwrap();
        assert_eq!(json["employee_id"], "F001");
    }
}
