use serde::{Deserialize, Serialize};

/// Correlation identifier for a request.
///
/// JSON-RPC allows a number, a string, or no id at all. A request without an
/// id is a notification and must never receive a reply, so absence is a
/// first-class variant rather than an `Option` wrapper around the other two.
///
/// Numbers are carried as `f64`: generic JSON decoding turns every number
/// into a float, and peers match ids under that coercion. An integral id
/// therefore re-encodes with a fractional part (`7` becomes `7.0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(f64),
    String(String),
    #[default]
    Null,
}

impl RequestId {
    /// True when no id is present. Serde uses this to drop the `id` key
    /// from notifications.
    pub fn is_none(&self) -> bool {
        matches!(self, RequestId::Null)
    }
}

impl From<f64> for RequestId {
    fn from(n: f64) -> Self {
        RequestId::Number(n)
    }
}

impl From<i32> for RequestId {
    fn from(n: i32) -> Self {
        RequestId::Number(n as f64)
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n as f64)
    }
}

impl From<u32> for RequestId {
    fn from(n: u32) -> Self {
        RequestId::Number(n as f64)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}
