//! Data-source seams for the VIP CRM endpoints.
//!
//! Handlers only see these traits. `AppState` carries them as `Arc<dyn _>`,
//! so the random mock can be swapped for a real backend without touching the
//! routes.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::vip::models::{
    ActivityFilter, AnalyticsPeriod, ClientActivity, Recommendation, VipAnalytics, VipInsights,
};

#[async_trait]
pub trait ClientActivityRepository: Send + Sync {
    /// Recent client activity, newest first, restricted to `filter`.
    async fn activity(&self, filter: ActivityFilter) -> Result<Vec<ClientActivity>, AppError>;

    /// Suggested follow-ups, highest priority first.
    async fn recommendations(&self) -> Result<Vec<Recommendation>, AppError>;
}

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn insights(&self) -> Result<VipInsights, AppError>;

    async fn analytics(&self, period: AnalyticsPeriod) -> Result<VipAnalytics, AppError>;
}
