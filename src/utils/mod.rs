use actix_web::{web, FromRequest};
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use futures_util::future::LocalBoxFuture;
use rand::rngs::OsRng;
use validator::{Validate, ValidationErrors};

use crate::api::error;

lazy_static::lazy_static! {
  static ref ARGON2: Argon2<'static> = Argon2::default();
}

/// CPU-heavy: call it from the blocking pool, not from a request future.
pub fn hash_password(password: &str) -> Result<String, error::SystemError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = ARGON2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

#[cfg(test)]
pub fn verify_password(hash: &str, password: &str) -> Result<bool, error::SystemError> {
    use argon2::{
        password_hash::{Error as PasswordHashError, PasswordHash},
        PasswordVerifier,
    };

    let parsed_hash = PasswordHash::new(hash)?;
    match ARGON2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(error::SystemError::HashError(e)),
    }
}

/// First human-readable message of a failed validation, falling back to the
/// full report when no field carries a custom message.
fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// JSON body that passed its `Validate` rules. Bodies that fail to parse are
/// answered by the route's `JsonConfig` error handler.
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest for ValidatedJson<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let model = fut.await?.into_inner();
            model
                .validate()
                .map_err(|e| error::Error::BadRequest(validation_message(&e).into()))?;
            Ok(ValidatedJson(model))
        })
    }
}
