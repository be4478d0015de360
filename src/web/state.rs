//! # Web API Application State
//!
//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::repository::TrackingRepository;
use crate::tracking::ProcessTrackingService;

#[derive(Clone)]
pub struct AppState {
    /// Web server configuration
    pub config: Arc<WebConfig>,

    /// Report service over the configured repository
    pub tracking_service: ProcessTrackingService,
}

impl AppState {
    pub fn new(config: WebConfig, repository: Arc<dyn TrackingRepository>) -> Self {
        Self {
            config: Arc::new(config),
            tracking_service: ProcessTrackingService::new(repository),
        }
    }

    pub fn repository(&self) -> &Arc<dyn TrackingRepository> {
        self.tracking_service.repository()
    }
}
