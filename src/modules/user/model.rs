use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::modules::user::schema::UserEntity;

pub const REQUIRED_FIELDS: &str = "username, email and password are required";

/// Absent fields deserialize as empty strings so both cases share one check.
#[derive(Deserialize, Validate)]
#[validate(schema(function = "every_field_present"))]
pub struct RegisterModel {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn every_field_present(model: &RegisterModel) -> Result<(), ValidationError> {
    if [&model.username, &model.email, &model.password].iter().any(|field| field.is_empty()) {
        let mut err = ValidationError::new("required");
        err.message = Some(REQUIRED_FIELDS.into());
        return Err(err);
    }
    Ok(())
}

pub struct InsertUser {
    pub username: String,
    pub email: String,
    pub hash_password: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse { id: entity.id, username: entity.username, email: entity.email }
    }
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}
