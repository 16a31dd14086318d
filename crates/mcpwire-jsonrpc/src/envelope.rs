//! Request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::value::{to_raw_value, RawValue};
use tracing::{debug, warn};

use crate::error::{codes, Error, ResponseError};
use crate::id::RequestId;
use crate::VERSION;

/// A JSON-RPC request or notification.
///
/// Envelopes are built once through a constructor and serialized for
/// transmission; nothing mutates them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub params: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "RequestId::is_none", default)]
    pub id: RequestId,
}

impl Request {
    /// Build a request. Fails with the standard Invalid Request error value
    /// when `method` is empty; the id is passed through unchecked.
    pub fn new<P>(method: &str, params: Option<&P>, id: RequestId) -> Result<Self, Error>
    where
        P: Serialize + ?Sized,
    {
        if method.is_empty() {
            warn!("rejecting request with empty method");
            return Err(Error::InvalidRequest(ResponseError::standard(
                codes::INVALID_REQUEST,
            )));
        }

        Ok(Self {
            jsonrpc: VERSION.to_string(),
            method: method.to_string(),
            params: serialize_payload(params)?,
            id,
        })
    }

    /// Build a notification: a request with no id, expecting no reply.
    pub fn notification<P>(method: &str, params: Option<&P>) -> Result<Self, Error>
    where
        P: Serialize + ?Sized,
    {
        Self::new(method, params, RequestId::Null)
    }

    /// True when the request carries no id.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// A JSON-RPC response.
///
/// The id mirrors the originating request and is always encoded, `null` only
/// when replying to a request whose id could not be determined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ResponseError>,
    #[serde(default)]
    pub id: RequestId,
}

impl Response {
    /// Build a success response; the error field stays unset.
    pub fn new<R>(result: Option<&R>, id: RequestId) -> Result<Self, Error>
    where
        R: Serialize + ?Sized,
    {
        Ok(Self {
            jsonrpc: VERSION.to_string(),
            result: serialize_payload(result)?,
            error: None,
            id,
        })
    }

    /// Build an error response; the result field stays unset.
    pub fn from_error(error: ResponseError, id: RequestId) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// A batch of requests, submitted as one wire message.
pub type BatchRequest = Vec<Request>;

/// A batch of responses.
pub type BatchResponse = Vec<Response>;

/// Serialize an optional opaque payload into its wire blob.
///
/// Payloads are serialized at construction time so a malformed value fails
/// here, in the builder, rather than when the envelope is encoded.
pub fn serialize_payload<P>(payload: Option<&P>) -> Result<Option<Box<RawValue>>, Error>
where
    P: Serialize + ?Sized,
{
    match payload {
        Some(value) => {
            let raw = to_raw_value(value).map_err(|e| {
                debug!("payload serialization failed: {}", e);
                Error::Serialize(e)
            })?;
            Ok(Some(raw))
        }
        None => Ok(None),
    }
}
