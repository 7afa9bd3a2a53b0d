// Wire shapes shared by every resource: response envelopes, pagination
// metadata, error bodies, and list query parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Envelopes ────────────────────────────────────────────────────────

/// `{ success, data, message }` wrapper around single-entity responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

/// `{ success, data: [...], meta: { pagination } }` wrapper around list responses.
///
/// The list endpoints hand back the raw JSON; decoding into this shape is
/// the normalizer's job so a shape mismatch becomes a recoverable error.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Vec<T>,
    pub meta: ListMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListMeta {
    pub pagination: PaginationMeta,
}

/// Pagination block as emitted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

// ── Errors ───────────────────────────────────────────────────────────

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Both error body flavours the backend emits:
/// `{ success: false, error: { code, message, details } }` from the custom
/// handlers, and FastAPI's `{ detail }` (string or list) from the framework.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    #[serde(default)]
    pub detail: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<ErrorDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorDetails {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    pub(crate) fn message(&self) -> Option<String> {
        if let Some(msg) = self.error.as_ref().and_then(|e| e.message.clone()) {
            return Some(msg);
        }
        match &self.detail {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Array(_)) => Some("Request validation failed".into()),
            _ => None,
        }
    }

    pub(crate) fn code(&self) -> Option<String> {
        self.error.as_ref().and_then(|e| e.code.clone())
    }

    /// Field errors from either body flavour. FastAPI reports
    /// `{ loc: ["body", "name"], msg }`; the location is dotted minus `body`.
    pub(crate) fn field_errors(&self) -> Vec<FieldError> {
        if let Some(details) = self.error.as_ref().and_then(|e| e.details.as_ref()) {
            if !details.errors.is_empty() {
                return details.errors.clone();
            }
        }
        let Some(Value::Array(items)) = &self.detail else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| {
                let message = item.get("msg")?.as_str()?.to_owned();
                let field = item
                    .get("loc")
                    .and_then(Value::as_array)
                    .map(|loc| {
                        loc.iter()
                            .filter(|p| p.as_str() != Some("body"))
                            .map(|p| match p {
                                Value::String(s) => s.clone(),
                                other => other.to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(".")
                    })
                    .unwrap_or_default();
                Some(FieldError { field, message })
            })
            .collect()
    }
}

// ── List parameters ──────────────────────────────────────────────────

/// Encoded query string for a list call: `skip`, `limit`, then whatever
/// filter and sort pairs the caller pushed. Absent filters are never pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pairs: Vec<(&'static str, String)>,
}

impl ListParams {
    pub fn new(skip: u64, limit: u32) -> Self {
        Self {
            pairs: vec![("skip", skip.to_string()), ("limit", limit.to_string())],
        }
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Push only when present and non-blank after trimming.
    pub fn push_text(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(key, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

// ── Payload helpers ──────────────────────────────────────────────────

/// Serialize a payload and drop top-level fields that are `null` or `""`.
///
/// Forms leave untouched inputs blank; the backend treats a present empty
/// string as a value, so blanks are removed rather than sent.
pub fn strip_blank_fields<B: Serialize + ?Sized>(body: &B) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(body)?;
    if let Value::Object(map) = &mut value {
        map.retain(|_, v| match v {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        });
    }
    Ok(value)
}
