use std::sync::Arc;

use eat2beat_core::application::Eat2BeatService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Eat2BeatService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: Eat2BeatService) -> Self {
        Self { args, service }
    }
}
