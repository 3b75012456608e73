use actix_web::{get, web};

use crate::modules::user::{model, service::UserService};
use crate::{
    api::{error, success},
    utils::ValidatedJson,
};

pub async fn register(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::RegisterModel>,
) -> Result<success::Success<model::RegisterResponse>, error::Error> {
    let user = user_service.register(user_data.0).await?;
    Ok(success::Success::created(Some(model::RegisterResponse { user }))
        .message("User created successfully"))
}

#[get("/users")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<model::UsersResponse>, error::Error> {
    let users = user_service.list_users().await?;
    Ok(success::Success::ok(Some(model::UsersResponse { users })))
}
