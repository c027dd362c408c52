// VIP CRM: placeholder client analytics behind repository traits.
// The only implementation today is the random mock; handlers never see it directly.

pub mod handlers;
pub mod mock;
pub mod models;
pub mod repository;

pub use mock::MockVipRepository;
pub use repository::{AnalyticsRepository, ClientActivityRepository};
