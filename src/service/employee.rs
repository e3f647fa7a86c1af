use std::sync::Arc;

use log::{info, warn};

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::repository::EmployeeRepository;

/// Email uniqueness lives here; everything else passes through to storage.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        EmployeeService { repository }
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn save_employee(&self, employee: Employee) -> Result<Employee, AppError> {
        if self.repository.find_by_email(&employee.email).await?.is_some() {
            warn!("Rejected create, email {} already in use", employee.email);
            return Err(AppError::AlreadyExists(format!(
                "Employee already exist with given email {}",
                employee.email
            )));
        }

        let saved = self.repository.save(employee).await?;
        info!("Created employee {:?}", saved.id);
        Ok(saved)
    }

    pub async fn update_employee(&self, updated: Employee) -> Result<Employee, AppError> {
        let id = updated
            .id
            .ok_or_else(|| AppError::BadRequest("Employee id is required for update".to_string()))?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee not found with given id {}", id)))?;
        let owner = self.repository.find_by_email(&updated.email).await?;

        let email_changed = existing.email != updated.email;
        let owned_by_other = owner.is_some_and(|other| other.id != Some(id));
        if email_changed && owned_by_other {
            warn!("Rejected update of employee {}, email {} already in use", id, updated.email);
            return Err(AppError::AlreadyExists(format!(
                "Update error, employee already exist with given email {}",
                updated.email
            )));
        }

        let saved = self.repository.save(updated).await?;
        info!("Updated employee {}", id);
        Ok(saved)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await?;
        info!("Deleted employee {}", id);
        Ok(())
    }
}
