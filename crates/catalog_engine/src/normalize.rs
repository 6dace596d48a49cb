use engine_logging::engine_warn;
use serde_json::Value;

use crate::{FailureKind, FetchError, GameRecord};

/// Parse a response body into records.
///
/// Accepts `{"results": [...]}` or a bare array. Any other JSON shape yields
/// an empty list; only a body that is not JSON at all is an error.
pub fn normalize_body(bytes: &[u8]) -> Result<Vec<GameRecord>, FetchError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::MalformedResponse, err.to_string()))?;
    Ok(normalize_value(&value))
}

pub fn normalize_value(value: &Value) -> Vec<GameRecord> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => items,
            _ => {
                engine_warn!("Response object has no `results` array; treating as empty");
                return Vec::new();
            }
        },
        other => {
            engine_warn!("Unexpected response shape ({}); treating as empty", kind_of(other));
            return Vec::new();
        }
    };
    items.iter().filter_map(record_from_value).collect()
}

/// Non-object items are skipped; unusable fields become `None`/empty.
fn record_from_value(item: &Value) -> Option<GameRecord> {
    let obj = item.as_object()?;
    Some(GameRecord {
        slug: obj.get("slug").and_then(string_of),
        background_image: obj.get("background_image").and_then(string_of),
        genres: obj.get("genres").map(genre_names).unwrap_or_default(),
        rating: obj.get("rating").and_then(coerce_rating),
    })
}

fn string_of(value: &Value) -> Option<String> {
    value.as_str().map(ToOwned::to_owned)
}

/// Genres arrive as `[{"name": "RPG"}, ...]`; plain strings are accepted too.
fn genre_names(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|genre| match genre {
            Value::String(name) => Some(name.clone()),
            Value::Object(map) => map.get("name").and_then(string_of),
            _ => None,
        })
        .collect()
}

/// Numbers pass through, numeric strings are parsed, everything else is
/// "unrated".
fn coerce_rating(value: &Value) -> Option<f64> {
    let rating = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    rating.is_finite().then_some(rating)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
