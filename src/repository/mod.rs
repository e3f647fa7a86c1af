use async_trait::async_trait;
use thiserror::Error;

use crate::models::employee::Employee;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEmployeeRepository;
pub use postgres::PgEmployeeRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no employee with id {0}")]
    NotFound(i64),
    #[error("email {0} is already taken")]
    DuplicateEmail(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence port for the `employees` table.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee, ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError>;
    /// Inserts when `employee.id` is `None`, otherwise overwrites the existing row.
    /// Overwriting an id with no row fails with `NotFound`.
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError>;
    /// Absent ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
