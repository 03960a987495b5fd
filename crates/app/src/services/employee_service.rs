//! Employee service — read-only use-cases for employees.

use devicehub_domain::employee::{Employee, EmployeeSummary};
use devicehub_domain::error::{DeviceHubError, NotFoundError};
use devicehub_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

/// Application service for employee lookups.
pub struct EmployeeService<R> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every employee's id and person.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, DeviceHubError> {
        self.repo.get_all().await
    }

    /// Look up an employee by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHubError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, DeviceHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Employee",
                id: id.to_string(),
            }
            .into()
        })
    }
}
