use crate::{
    api::error,
    modules::user::{model::InsertUser, schema::UserEntity},
};

#[async_trait::async_trait]
pub trait UserRepository {
    /// Exact, case-sensitive match on the username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError>;

    /// Inserts the user unless the username is already taken, in which case
    /// `SystemError::Conflict` is returned and nothing is stored. The check and
    /// the insert happen as one step.
    async fn create(&self, user: InsertUser) -> Result<UserEntity, error::SystemError>;

    /// Every stored user, in insertion order.
    async fn list_all(&self) -> Result<Vec<UserEntity>, error::SystemError>;
}
