use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Loose truthiness used by the presence checks on request bodies:
/// missing, `null`, `false`, `0`, `NaN` and `""` all count as absent.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Converts a JSON value from a request body into BSON.
pub fn to_bson(value: &Value) -> Option<Bson> {
    match value {
        Value::Null => Some(Bson::Null),
        Value::Bool(b) => Some(Bson::Boolean(*b)),
        Value::String(s) => Some(Bson::String(s.clone())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(match i32::try_from(i) {
                    Ok(small) => Bson::Int32(small),
                    Err(_) => Bson::Int64(i),
                })
            } else {
                n.as_f64().map(Bson::Double)
            }
        }
        Value::Array(_) | Value::Object(_) => Bson::try_from(value.clone()).ok(),
    }
}

/// Converts a selector value. Only strings, numbers and booleans are
/// accepted: objects and arrays would reach the store as query operators.
pub fn scalar_to_bson(value: &Value) -> Option<Bson> {
    match value {
        Value::Bool(_) | Value::String(_) | Value::Number(_) => to_bson(value),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Renders a stored document as plain JSON for the response envelope.
/// Top-level ObjectIds become hex strings, the same shape as `insertedId`.
pub fn document_to_json(doc: Document) -> Value {
    let doc: Document = doc
        .into_iter()
        .map(|(key, value)| match value {
            Bson::ObjectId(oid) => (key, Bson::String(oid.to_hex())),
            other => (key, other),
        })
        .collect();
    Bson::Document(doc).into_relaxed_extjson()
}
