//! Roster of payable workers.

use solidforge_core::{DomainError, DomainResult};

use crate::employee::{EmployeeId, FullTimeEmployee, Intern, Payable, Vendor};

/// In-memory roster.
#[derive(Debug, Default)]
pub struct EmployeeRepository {
    payables: Vec<Box<dyn Payable>>,
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with the standard roster (one of each variant).
    pub fn seeded() -> Self {
        Self {
            payables: Self::payable_employees(),
        }
    }

    /// The standard roster.
    pub fn payable_employees() -> Vec<Box<dyn Payable>> {
        vec![
            Box::new(FullTimeEmployee::new("Alice", "F001", 50_000, 10_000)),
            Box::new(Intern::new("Bob", "I101", 8_000)),
            Box::new(Vendor::new("accenture", "A401", 5_000_000)),
        ]
    }

    /// Add a worker. Rejects a duplicate id.
    pub fn add(&mut self, payable: Box<dyn Payable>) -> DomainResult<()> {
        if self.payables.iter().any(|p| p.id() == payable.id()) {
            return Err(DomainError::validation(format!(
                "employee {} already exists",
                payable.id()
            )));
        }
        tracing::debug!(employee_id = %payable.id(), "employee added to roster");
        self.payables.push(payable);
        Ok(())
    }

    pub fn find(&self, id: &EmployeeId) -> DomainResult<&dyn Payable> {
        self.payables
            .iter()
            .find(|p| p.id() == id)
            .map(|p| &**p)
            .ok_or_else(DomainError::not_found)
    }

    pub fn all(&self) -> &[Box<dyn Payable>] {
        &self.payables
    }

    pub fn len(&self) -> usize {
        self.payables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payables.is_empty()
    }
}
