//! User Repository

use std::sync::Arc;

use shared::models::User;

use crate::db::MemoryStore;

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<MemoryStore>,
}

impl UserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.store
            .users
            .read()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    #[test]
    fn finds_staff_by_email() {
        let repo = UserRepository::new(Arc::new(MemoryStore::seeded()));
        let admin = repo.find_by_email("admin@gourmetgo.com").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(repo.find_by_email("nobody@gourmetgo.com").is_none());
    }
}
