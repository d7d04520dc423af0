//! User repository and demo seed data.

use std::sync::RwLock;

use ecodrop_core::User;

pub struct UserStore {
    inner: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            inner: RwLock::new(users),
        }
    }

    /// The demo data set: a single user with some history.
    pub fn with_demo_data() -> Self {
        Self::new(vec![User {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: "demo@ewaste.com".to_string(),
            points: 2450,
            recycled_items: 18,
            co2_saved: 34.5,
            achievements: vec![
                "first_recycler".to_string(),
                "eco_warrior".to_string(),
                "ten_items".to_string(),
            ],
            join_date: "2024-01-15T08:00:00Z".parse().expect("demo timestamp"),
        }])
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("user table lock poisoned").len()
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.inner
            .read()
            .expect("user table lock poisoned")
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    /// Credit a drop-off to a user, returning the updated record.
    /// `None` when the id is unknown; the caller decides whether that is
    /// an error.
    pub fn credit_drop(&self, id: &str, value: i64, co2_saved: f64) -> Option<User> {
        let mut guard = self.inner.write().expect("user table lock poisoned");
        let user = guard.iter_mut().find(|u| u.id == id)?;
        user.credit_drop(value, co2_saved);
        Some(user.clone())
    }
}
