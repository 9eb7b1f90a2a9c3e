//! Response normalization
//!
//! `/api/assets` has been observed answering with a bare array as well as a
//! `{success, data, message}` envelope. Classification, in priority order:
//!
//! 1. array                          -> the forest
//! 2. object with a `success` key
//!    - `success: true`, array data  -> the forest
//!    - `success: true`, other data  -> `InvalidFormat`
//!    - anything else                -> `ApiReported(message)`
//! 3. anything else                  -> `InvalidFormat`

use serde_json::Value;

use asset_monitor_types::Asset;

use crate::error::FetchError;
use crate::tree::forest_depth;

/// Deepest forest accepted from the wire.
pub const MAX_ASSET_DEPTH: usize = 32;

pub fn normalize_payload(payload: Value) -> Result<Vec<Asset>, FetchError> {
    match payload {
        Value::Array(items) => parse_forest(Value::Array(items)),
        Value::Object(mut body) if body.contains_key("success") => {
            if body.get("success") == Some(&Value::Bool(true)) {
                match body.remove("data") {
                    Some(data @ Value::Array(_)) => parse_forest(data),
                    _ => {
                        tracing::warn!("success envelope without an array in `data`");
                        Err(FetchError::InvalidFormat)
                    }
                }
            } else {
                Err(FetchError::api_reported(
                    body.get("message").and_then(Value::as_str),
                ))
            }
        }
        _ => {
            tracing::warn!("unrecognized asset payload shape");
            Err(FetchError::InvalidFormat)
        }
    }
}

fn parse_forest(data: Value) -> Result<Vec<Asset>, FetchError> {
    let assets: Vec<Asset> = serde_json::from_value(data).map_err(|e| {
        tracing::warn!("asset array did not deserialize: {}", e);
        FetchError::InvalidFormat
    })?;

    let depth = forest_depth(&assets);
    if depth > MAX_ASSET_DEPTH {
        tracing::warn!(depth, limit = MAX_ASSET_DEPTH, "asset forest too deep");
        return Err(FetchError::InvalidFormat);
    }

    Ok(assets)
}
