use std::sync::Arc;

use crate::ai::chat::SpeciesChat;

pub struct AppState {
    // Built once at startup and shared by every request
    pub chat: Arc<SpeciesChat>,
}

impl AppState {
    pub fn new(chat: SpeciesChat) -> Self {
        Self {
            chat: Arc::new(chat),
        }
    }
}
