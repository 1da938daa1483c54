use std::sync::Arc;
use tracen_core::ContentClient;

pub struct AppState {
    pub client: Arc<dyn ContentClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn ContentClient>) -> Self {
        Self { client }
    }
}
