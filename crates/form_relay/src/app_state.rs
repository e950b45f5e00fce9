use std::sync::Arc;

use shared::domain::AccessKey;

use crate::relay::FormUpstream;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn FormUpstream>,
    pub access_key: Option<AccessKey>,
    pub max_body_bytes: usize,
}
