use crate::errors::ServiceError;
use crate::models::{Employee, User};
use bcrypt::{hash, verify, DEFAULT_COST};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Account storage keyed by email. Owns password hashing; callers only ever
/// see verification results, never the stored hash.
#[derive(Default)]
pub struct UserStore {
    users: Mutex<HashMap<String, User>>,
}

impl UserStore {
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.lock().await.get(email).cloned()
    }

    /// Creates an account with a freshly assigned id, hashing the password.
    /// The email doubles as the username.
    pub async fn create(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        if !password_meets_policy(password) {
            return Err(ServiceError::WeakPassword);
        }

        let password_hash = hash(password, DEFAULT_COST)?;
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash,
        };
        self.users
            .lock()
            .await
            .insert(email.to_string(), user.clone());
        Ok(user)
    }

    pub fn verify_password(&self, user: &User, password: &str) -> bool {
        verify(password, &user.password_hash).unwrap_or(false)
    }
}

/// At least eight characters, one uppercase letter, one digit and one
/// non-alphanumeric character.
fn password_meets_policy(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_numeric)
        && password.chars().any(|c| !c.is_alphanumeric())
}

/// Employee records keyed by integer id. Ids are assigned by the store.
#[derive(Default)]
pub struct EmployeeStore {
    employees: Mutex<HashMap<i32, Employee>>,
    next_id: AtomicI32,
}

impl EmployeeStore {
    pub async fn list(&self) -> Vec<Employee> {
        let mut all: Vec<Employee> = self.employees.lock().await.values().cloned().collect();
        all.sort_by_key(|e| e.employee_id);
        all
    }

    pub async fn get(&self, id: i32) -> Option<Employee> {
        self.employees.lock().await.get(&id).cloned()
    }

    /// Inserts a record under the next free id, ignoring any id in the input.
    pub async fn insert(&self, mut employee: Employee) -> Employee {
        employee.employee_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.employees
            .lock()
            .await
            .insert(employee.employee_id, employee.clone());
        employee
    }

    /// Replaces an existing record. Returns `None` when no record with the
    /// given id exists.
    pub async fn update(&self, employee: Employee) -> Option<Employee> {
        let mut employees = self.employees.lock().await;
        if !employees.contains_key(&employee.employee_id) {
            return None;
        }
        employees.insert(employee.employee_id, employee.clone());
        Some(employee)
    }

    pub async fn remove(&self, id: i32) -> bool {
        self.employees.lock().await.remove(&id).is_some()
    }
}
