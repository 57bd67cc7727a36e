use serde::{Deserialize, Serialize};

use solidforge_core::{DomainError, Entity};

/// Employee identifier (e.g. `"F001"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for EmployeeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("EmployeeId: empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identity shared by every kind of worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    id: EmployeeId,
}

impl Employee {
    pub fn new(name: impl Into<String>, id: impl Into<EmployeeId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.id
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Anything that can be paid.
///
/// Amounts are whole currency units.
pub trait Payable: core::fmt::Debug {
    /// The worker behind this payable.
    fn employee(&self) -> &Employee;

    fn calculate_salary(&self) -> u64;

    fn name(&self) -> &str {
        self.employee().name()
    }

    fn id(&self) -> &EmployeeId {
        self.employee().employee_id()
    }
}

/// Salaried employee: base pay plus stock options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTimeEmployee {
    employee: Employee,
    base_pay: u64,
    stock_options: u64,
}

impl FullTimeEmployee {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<EmployeeId>,
        base_pay: u64,
        stock_options: u64,
    ) -> Self {
        Self {
            employee: Employee::new(name, id),
            base_pay,
            stock_options,
        }
    }

    pub fn base_pay(&self) -> u64 {
        self.base_pay
    }

    pub fn stock_options(&self) -> u64 {
        self.stock_options
    }
}

impl Payable for FullTimeEmployee {
    fn employee(&self) -> &Employee {
        &self.employee
    }

    fn calculate_salary(&self) -> u64 {
        self.base_pay.saturating_add(self.stock_options)
    }
}

/// Intern paid a fixed stipend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intern {
    employee: Employee,
    stipend: u64,
}

impl Intern {
    pub fn new(name: impl Into<String>, id: impl Into<EmployeeId>, stipend: u64) -> Self {
        Self {
            employee: Employee::new(name, id),
            stipend,
        }
    }
}

impl Payable for Intern {
    fn employee(&self) -> &Employee {
        &self.employee
    }

    fn calculate_salary(&self) -> u64 {
        self.stipend
    }
}

/// External vendor paid per project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    employee: Employee,
    project_fee: u64,
}

impl Vendor {
    pub fn new(name: impl Into<String>, id: impl Into<EmployeeId>, project_fee: u64) -> Self {
        Self {
            employee: Employee::new(name, id),
            project_fee,
        }
    }
}

impl Payable for Vendor {
    fn employee(&self) -> &Employee {
        &self.employee
    }

    fn calculate_salary(&self) -> u64 {
        self.project_fee
    }
}
