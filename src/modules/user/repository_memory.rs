use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    api::error,
    modules::user::{model::InsertUser, repository::UserRepository, schema::UserEntity},
};

/// Process-lifetime user store. Nothing is persisted: every record is lost
/// when the process exits.
#[derive(Default)]
pub struct UserRepositoryMemory {
    users: RwLock<Vec<UserEntity>>,
}

impl UserRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryMemory {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: InsertUser) -> Result<UserEntity, error::SystemError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(error::SystemError::conflict("Username already exists"));
        }

        let entity = UserEntity {
            id: Uuid::now_v7(),
            username: user.username,
            email: user.email,
            hash_password: user.hash_password,
            created_at: chrono::Utc::now(),
        };
        users.push(entity.clone());
        Ok(entity)
    }

    async fn list_all(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        Ok(self.users.read().await.clone())
    }
}
