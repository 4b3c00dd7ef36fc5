//! JSON body extractor that runs `validator` rules before the handler sees the value

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Prefix axum puts in front of the decoder message for shape errors
const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Malformed, mistyped or rule-breaking bodies are all rejected with 422
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn body_rejection(rejection: JsonRejection) -> ApiError {
    let message = rejection.body_text();
    let field = match rejection {
        JsonRejection::JsonDataError(_) => rejected_field(&message),
        _ => None,
    };
    ApiError::invalid_body(message, field)
}

/// Field named by a shape error: `missing field `x`` or `x: invalid type ...`
fn rejected_field(message: &str) -> Option<String> {
    let detail = message.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(message);

    if let Some(rest) = detail.strip_prefix("missing field `") {
        return rest.split('`').next().map(str::to_string);
    }

    let (path, _) = detail.split_once(": ")?;
    (!path.is_empty() && !path.contains(' ')).then(|| path.to_string())
}
