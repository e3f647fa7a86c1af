use async_trait::async_trait;
use sqlx::PgPool;

use super::{EmployeeRepository, RepositoryError};
use crate::models::employee::Employee;

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

fn map_write_error(err: sqlx::Error, email: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::DuplicateEmail(email.to_string())
        }
        _ => RepositoryError::Database(err),
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        match employee.id {
            None => sqlx::query_as::<_, Employee>(
                "INSERT INTO employees (first_name, last_name, email) VALUES ($1, $2, $3) \
                 RETURNING id, first_name, last_name, email",
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_write_error(err, &employee.email)),
            Some(id) => sqlx::query_as::<_, Employee>(
                "UPDATE employees SET first_name = $1, last_name = $2, email = $3 WHERE id = $4 \
                 RETURNING id, first_name, last_name, email",
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_write_error(err, &employee.email))?
            .ok_or(RepositoryError::NotFound(id)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
