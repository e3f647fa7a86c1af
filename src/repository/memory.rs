use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{EmployeeRepository, RepositoryError};
use crate::models::employee::Employee;

/// Embedded store used when no database is configured. Mirrors the
/// PostgreSQL table: ids start at 1 and emails are unique.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    fn email_taken_by_other(&self, email: &str, id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && row.id != id)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        Ok(self
            .lock()
            .rows
            .values()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        let mut state = self.lock();

        if let Some(id) = employee.id {
            if !state.rows.contains_key(&id) {
                return Err(RepositoryError::NotFound(id));
            }
        }
        if state.email_taken_by_other(&employee.email, employee.id) {
            return Err(RepositoryError::DuplicateEmail(employee.email));
        }

        let id = match employee.id {
            Some(id) => id,
            None => {
                state.last_id += 1;
                state.last_id
            }
        };
        employee.id = Some(id);
        state.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.lock().rows.remove(&id);
        Ok(())
    }
}
