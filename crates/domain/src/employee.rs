//! Employee — a staff member with identity fields, salary and position.

use serde::{Deserialize, Serialize};

use crate::id::{EmployeeId, PositionId};
use crate::time::Timestamp;

/// Identity fields of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl Person {
    /// Join the non-empty name parts with single spaces.
    ///
    /// Used by the employee endpoints: a person without a middle name
    /// renders as `"Jane Doe"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            self.first_name.as_str(),
            self.middle_name.as_deref().unwrap_or_default(),
            self.last_name.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Concatenate first, middle and last name around two fixed spaces.
    ///
    /// Used when a person is embedded as a device's current employee. Empty
    /// parts are kept, so a missing middle name renders as `"Jane  Doe"`.
    #[must_use]
    pub fn joined_name(&self) -> String {
        format!(
            "{} {} {}",
            self.first_name,
            self.middle_name.as_deref().unwrap_or_default(),
            self.last_name
        )
    }
}

/// A job position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub name: String,
}

/// A fully loaded employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub salary: f64,
    pub hire_date: Timestamp,
    pub person: Person,
    pub position: Position,
}

/// Employee identity as returned by the listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: EmployeeId,
    pub person: Person,
}
