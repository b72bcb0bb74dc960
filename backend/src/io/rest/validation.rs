//! Request validation for item endpoints.
//!
//! Bodies are parsed into a `serde_json::Value` first and then checked field
//! by field, so a single 422 response can report every problem at once. Only
//! a fully valid body becomes an [`ItemCreate`].

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use shared::{ErrorDetail, ItemCreate};

use super::error::ApiError;

const BODY: &str = "body";

/// Validated `ItemCreate` request body
#[derive(Debug, Clone)]
pub struct ItemBody(pub ItemCreate);

#[async_trait]
impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_item_create(&bytes)
            .map(ItemBody)
            .map_err(IntoResponse::into_response)
    }
}

/// Item id taken from the `item_id` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_item_id(&raw).map_err(IntoResponse::into_response)
    }
}

pub fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.trim().parse::<i64>().map(ItemId).map_err(|_| {
        ApiError::validation(ErrorDetail::new(
            &["path", "item_id"],
            "Input should be a valid integer, unable to parse string as an integer",
            "int_parsing",
        ))
    })
}

/// Decode and validate a raw request body
pub fn parse_item_create(bytes: &[u8]) -> Result<ItemCreate, ApiError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|err| {
        ApiError::validation(ErrorDetail::new(
            &[BODY],
            format!("JSON decode error: {err}"),
            "json_invalid",
        ))
    })?;

    validate_item_create(&value).map_err(ApiError::Validation)
}

/// Check a decoded body against the `ItemCreate` schema, collecting all errors
pub fn validate_item_create(value: &Value) -> Result<ItemCreate, Vec<ErrorDetail>> {
    let Some(fields) = value.as_object() else {
        return Err(vec![ErrorDetail::new(
            &[BODY],
            "Input should be a valid dictionary",
            "dict_type",
        )]);
    };

    let mut errors = Vec::new();
    let name = required_string(fields, "name", &mut errors);
    let description = optional_string(fields, "description", &mut errors);
    let completed = optional_bool(fields, "completed", &mut errors);

    match name {
        Some(name) if errors.is_empty() => Ok(ItemCreate {
            name,
            description,
            completed: completed.unwrap_or(false),
        }),
        _ => Err(errors),
    }
}

fn required_string(
    fields: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<ErrorDetail>,
) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(string_type(key));
            None
        }
        None => {
            errors.push(ErrorDetail::new(&[BODY, key], "Field required", "missing"));
            None
        }
    }
}

fn optional_string(
    fields: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<ErrorDetail>,
) -> Option<String> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(string_type(key));
            None
        }
    }
}

fn optional_bool(
    fields: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<ErrorDetail>,
) -> Option<bool> {
    match fields.get(key) {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            errors.push(ErrorDetail::new(
                &[BODY, key],
                "Input should be a valid boolean",
                "bool_type",
            ));
            None
        }
    }
}

fn string_type(key: &str) -> ErrorDetail {
    ErrorDetail::new(&[BODY, key], "Input should be a valid string", "string_type")
}
