//! JSON extractor whose rejections use the service error envelope.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Drop-in replacement for [`axum::Json`] that rejects with the same
/// JSON error envelope every other failure uses.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    ErrorKind::BadRequest
                        .with_message("The request body is not valid JSON for this endpoint")
                        .with_context(rejection.to_string())
                })?;

        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    #[inline]
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
