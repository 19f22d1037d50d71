use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Uniform response envelope.
///
/// Successful responses carry the payload in `data`; failures carry a
/// [`MessageData`] so clients always find a human readable `data.message`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

/// `{ "message": "..." }` payload used by error envelopes and acknowledgements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl ApiResponse<MessageData> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: MessageData::new(message),
        }
    }
}

/// Serialize a timestamp as RFC 3339 UTC with fixed microsecond precision.
///
/// PostgreSQL stores microseconds, so this is the widest lossless form.
pub fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
}
