use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Body accepted by create and update. Any `id` sent by the client is ignored.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    #[cfg(test)]
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Employee {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    /// Overwrites the mutable fields, keeping the id.
    pub fn apply(&mut self, payload: EmployeePayload) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.email = payload.email;
    }
}

impl From<EmployeePayload> for Employee {
    fn from(payload: EmployeePayload) -> Self {
        Employee {
            id: None,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        }
    }
}
