use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

pub const WEB3FORMS_SUBMIT_URL: &str = "https://api.web3forms.com/submit";
pub const ACCESS_KEY_FIELD: &str = "access_key";

pub fn submit_route() -> &'static str {
    "/submit"
}

pub fn healthz_route() -> &'static str {
    "/healthz"
}

/// Status and JSON body exactly as the upstream API returned them. The body
/// is kept as the upstream's own text so key order and formatting survive
/// the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Box<RawValue>,
}

#[derive(Deserialize)]
struct Verdict {
    success: Option<bool>,
    message: Option<String>,
}

impl UpstreamReply {
    /// Fails when `bytes` is not a JSON document.
    pub fn from_slice(status: u16, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status,
            body: serde_json::from_slice(bytes)?,
        })
    }

    pub fn from_value(status: u16, body: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status,
            body: serde_json::value::to_raw_value(body)?,
        })
    }

    pub fn body_text(&self) -> &str {
        self.body.get()
    }

    fn verdict(&self) -> Option<Verdict> {
        serde_json::from_str(self.body.get()).ok()
    }

    /// Web3Forms reports its own verdict in `success`, independent of status.
    pub fn reported_success(&self) -> Option<bool> {
        self.verdict()?.success
    }

    pub fn message(&self) -> Option<String> {
        self.verdict()?.message
    }
}
