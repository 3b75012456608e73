use actix_web::web;
use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::model::{InsertUser, RegisterModel, UserResponse};
use crate::modules::user::repository::UserRepository;
use crate::utils::hash_password;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    /// Hashes and stores a new user. The model arrives already validated.
    pub async fn register(&self, user: RegisterModel) -> Result<UserResponse, error::SystemError> {
        // Cheap rejection before paying for the hash; `create` re-checks atomically.
        if self.repo.find_by_username(&user.username).await?.is_some() {
            return Err(error::SystemError::conflict("Username already exists"));
        }

        let password = user.password;
        let hash_password = web::block(move || hash_password(&password)).await??;

        let entity = self
            .repo
            .create(InsertUser { username: user.username, email: user.email, hash_password })
            .await?;

        info!("User {} registered as {} at {}", entity.username, entity.id, entity.created_at);
        Ok(UserResponse::from(entity))
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, error::SystemError> {
        let users = self.repo.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
