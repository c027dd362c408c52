use std::sync::Arc;

use crate::config::SiteConfig;
use crate::directory::EmployeeDirectory;
use crate::vip::{AnalyticsRepository, ClientActivityRepository, MockVipRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<EmployeeDirectory>,
    pub site: Arc<SiteConfig>,
    /// Client activity feed and recommendations. Default: MockVipRepository.
    pub activity: Arc<dyn ClientActivityRepository>,
    /// Insights and period analytics. Default: MockVipRepository.
    pub analytics: Arc<dyn AnalyticsRepository>,
}

impl AppState {
    /// State backed by the random mock for both VIP repositories.
    pub fn with_mock_vip(directory: EmployeeDirectory, site: SiteConfig, seed: Option<u64>) -> Self {
        let mock = Arc::new(MockVipRepository::new(seed));
        Self {
            directory: Arc::new(directory),
            site: Arc::new(site),
            activity: mock.clone(),
            analytics: mock,
        }
    }
}
