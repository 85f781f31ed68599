//! JSON body extractor with field validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use ragrelay_core::Validate;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Like [`Json`], but also runs [`Validate::validate`] on the body.
///
/// Handlers taking this extractor only ever see bodies that passed
/// validation; anything else is answered with 422 before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
