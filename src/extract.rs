// src/extract.rs
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::AppError,
    validation::{FieldViolation, Validate, check_shape},
};

/// JSON body that has already passed [`Validate`].
///
/// Handlers taking this extractor only run once the body is well-formed and
/// every constraint holds; otherwise the request is answered with a 422.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection_violation(rejection)]))?;

        check_shape::<T>(&body).map_err(AppError::Validation)?;

        // The shape check passed, so a failure here means the model and its
        // STRING_FIELDS disagree.
        let value: T = serde_json::from_value(body).map_err(|err| {
            AppError::Internal(format!("validated body did not deserialize: {err}"))
        })?;

        value.validate().map_err(AppError::Validation)?;
        Ok(Self(value))
    }
}

fn rejection_violation(rejection: JsonRejection) -> FieldViolation {
    debug!(%rejection, "rejected request body");
    match rejection {
        JsonRejection::MissingJsonContentType(_) => FieldViolation::not_an_object(None),
        other => FieldViolation::json_invalid(other.body_text()),
    }
}
