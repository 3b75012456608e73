use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[allow(dead_code)]
    pub hash_password: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
