//! JSON extractor with payload validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::handler::{Error, ErrorKind};

/// Extractor that deserializes a JSON body and runs its
/// [`Validate`] rules, rejecting with a field-scoped 400 on failure.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ErrorKind::BadRequest
                .with_message("The request body is not valid JSON for this endpoint")
                .with_context(rejection.to_string())
        })?;

        value.validate()?;

        Ok(ValidateJson(value))
    }
}
