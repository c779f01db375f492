/// Typed shape of the message API's JSON response body.
use serde::Deserialize;

/// Response body returned by the message endpoint.
///
/// Every field is optional so that any well-formed JSON object decodes; a
/// missing `errors` array means no application-level errors were reported.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    /// 1 when the request was accepted, 0 when it was rejected.
    pub status: Option<u8>,
    /// Server-assigned request identifier.
    pub request: Option<String>,
    /// Human-readable rejection reasons.
    pub errors: Option<Vec<String>>,
}
