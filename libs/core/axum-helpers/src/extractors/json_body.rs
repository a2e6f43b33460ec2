//! Raw JSON body extractor with the application's error shape.

use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Request body parsed as an untyped JSON document.
///
/// Field-level checks run afterwards against the raw value, so a body whose
/// fields have the wrong types still reaches validation. A missing body, or
/// one not declared as JSON, reads as `{}` and is left to the field rules.
/// Only a declared JSON body that does not parse is rejected here (400).
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(body): JsonBody) -> String {
///     format!("name = {}", body["name"])
/// }
/// ```
pub struct JsonBody(pub Value);

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !declared_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }

        let Json(value) = Json::<Value>::from_bytes(&bytes)?;
        Ok(JsonBody(value))
    }
}
