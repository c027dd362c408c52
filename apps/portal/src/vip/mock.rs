//! Random placeholder data for the VIP CRM dashboard.
//!
//! Nothing here is real. Values are drawn from fixed ranges so the dashboard
//! looks plausible; with a seed the output of each call is reproducible.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::fire22::{
    CustomerSummary, TransactionKind, TransactionSummary, WagerStatus, WagerSummary,
};
use crate::vip::models::{
    ActivityFilter, ActivityType, AiInsight, AnalyticsPeriod, ClientActivity, Priority,
    Recommendation, VipAnalytics, VipInsights, HIGH_VALUE_THRESHOLD,
};
use crate::vip::repository::{AnalyticsRepository, ClientActivityRepository};

/// Single-day revenue range every period is scaled from.
pub const DAILY_REVENUE_RANGE: std::ops::Range<f64> = 50_000.0..150_000.0;
pub const CONFIDENCE_RANGE: std::ops::Range<f64> = 0.70..0.99;

const CLIENTS: &[(&str, &str)] = &[
    ("BB1001", "Alexander Morgan"),
    ("BB1002", "Victoria Sterling"),
    ("BB1003", "James Whitfield"),
    ("BB1004", "Isabella Laurent"),
    ("BB1005", "Robert Kingsley"),
    ("BB1006", "Sophia Castellano"),
    ("BB1007", "Michael Ashford"),
    ("BB1008", "Olivia Hartman"),
];

const SPORTS: &[&str] = &["NFL", "NBA", "MLB", "NHL", "Soccer", "Tennis"];

const WAGER_STATUSES: &[WagerStatus] = &[
    WagerStatus::Pending,
    WagerStatus::Won,
    WagerStatus::Lost,
    WagerStatus::Void,
];

// Salts keep the per-endpoint streams apart when a seed is configured.
const SALT_INSIGHTS: u64 = 0x01;
const SALT_ACTIVITY: u64 = 0x02;
const SALT_RECOMMENDATIONS: u64 = 0x03;
const SALT_ANALYTICS: u64 = 0x04;

#[derive(Debug, Clone, Default)]
pub struct MockVipRepository {
    seed: Option<u64>,
}

impl MockVipRepository {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self, salt: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(salt)),
            None => StdRng::from_entropy(),
        }
    }
}

fn money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pick_client(rng: &mut StdRng) -> (&'static str, &'static str) {
    CLIENTS[rng.gen_range(0..CLIENTS.len())]
}

fn confidence(rng: &mut StdRng) -> f64 {
    (rng.gen_range(CONFIDENCE_RANGE) * 100.0).round() / 100.0
}

fn customer(rng: &mut StdRng, customer_id: &str, name: &str) -> CustomerSummary {
    CustomerSummary {
        customer_id: customer_id.to_string(),
        name: name.to_string(),
        agent_id: format!("AG{:02}", rng.gen_range(1..=12)),
        balance: money(rng.gen_range(5_000.0..250_000.0)),
        lifetime_volume: money(rng.gen_range(250_000.0..5_000_000.0)),
        vip_level: rng.gen_range(1..=5),
        last_active: Utc::now() - Duration::minutes(rng.gen_range(0..2_880)),
    }
}

/// Amount for a monetary activity; high-value requests never go below the threshold.
fn activity_amount(rng: &mut StdRng, activity_type: ActivityType, filter: ActivityFilter) -> Option<f64> {
    if !activity_type.is_monetary() {
        return None;
    }
    let (low, high) = match activity_type {
        ActivityType::LargeBet => (HIGH_VALUE_THRESHOLD, 100_000.0),
        ActivityType::Deposit => (1_000.0, 50_000.0),
        ActivityType::Withdrawal => (1_000.0, 40_000.0),
        _ => (100.0, 5_000.0),
    };
    let low = if filter == ActivityFilter::HighValue {
        low.max(HIGH_VALUE_THRESHOLD)
    } else {
        low
    };
    Some(money(rng.gen_range(low..high)))
}

fn describe(activity_type: ActivityType, amount: Option<f64>) -> String {
    let amount = amount.unwrap_or_default();
    match activity_type {
        ActivityType::LargeBet => format!("Placed a ${amount:.2} wager"),
        ActivityType::Deposit => format!("Deposited ${amount:.2}"),
        ActivityType::Withdrawal => format!("Requested a ${amount:.2} withdrawal"),
        ActivityType::Login => "Logged in".to_string(),
        ActivityType::TierUpgrade => "Upgraded to a higher VIP tier".to_string(),
        ActivityType::FirstDeposit => format!("Made a first deposit of ${amount:.2}"),
        ActivityType::Registration => "Registered a new account".to_string(),
    }
}

#[async_trait]
impl ClientActivityRepository for MockVipRepository {
    async fn activity(&self, filter: ActivityFilter) -> Result<Vec<ClientActivity>, AppError> {
        let mut rng = self.rng(SALT_ACTIVITY);
        let count = rng.gen_range(5..=15);
        let now = Utc::now();
        let types = filter.types();

        let mut items: Vec<ClientActivity> = (0..count)
            .map(|_| {
                let activity_type = types[rng.gen_range(0..types.len())];
                let (customer_id, client_name) = pick_client(&mut rng);
                let amount = activity_amount(&mut rng, activity_type, filter);
                ClientActivity {
                    id: Uuid::from_u128(rng.gen()),
                    customer_id: customer_id.to_string(),
                    client_name: client_name.to_string(),
                    activity_type,
                    description: describe(activity_type, amount),
                    amount,
                    timestamp: now - Duration::minutes(rng.gen_range(0..720)),
                }
            })
            .collect();

        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        debug_assert!(items.iter().all(|a| filter.admits(a)));
        debug!("Generated {} {} activity items", items.len(), filter.as_str());
        Ok(items)
    }

    async fn recommendations(&self) -> Result<Vec<Recommendation>, AppError> {
        const TEMPLATES: &[(&str, &str, Priority)] = &[
            (
                "Offer a personal host call",
                "Betting volume dropped 40% over the last two weeks",
                Priority::High,
            ),
            (
                "Extend a reload bonus",
                "Deposit frequency is below the client's 90-day average",
                Priority::Medium,
            ),
            (
                "Invite to the next hospitality event",
                "Lifetime volume places the client in the top 5%",
                Priority::Medium,
            ),
            (
                "Review betting limits",
                "Recent stakes are approaching the current limit",
                Priority::High,
            ),
            (
                "Send a birthday gift",
                "Client birthday falls within the next 7 days",
                Priority::Low,
            ),
            (
                "Propose a tier upgrade",
                "Volume qualifies for the next VIP tier",
                Priority::Low,
            ),
        ];

        let mut rng = self.rng(SALT_RECOMMENDATIONS);
        let count = rng.gen_range(3..=TEMPLATES.len());

        let mut items: Vec<Recommendation> = TEMPLATES
            .choose_multiple(&mut rng, count)
            .copied()
            .collect::<Vec<_>>()
            .into_iter()
            .map(|(action, reason, priority)| {
                let (customer_id, client_name) = pick_client(&mut rng);
                Recommendation {
                    id: Uuid::from_u128(rng.gen()),
                    customer_id: customer_id.to_string(),
                    client_name: client_name.to_string(),
                    action: action.to_string(),
                    reason: reason.to_string(),
                    priority,
                    confidence: confidence(&mut rng),
                    expected_value: money(rng.gen_range(500.0..25_000.0)),
                }
            })
            .collect();

        items.sort_by_key(|r| r.priority);
        Ok(items)
    }
}

#[async_trait]
impl AnalyticsRepository for MockVipRepository {
    async fn insights(&self) -> Result<VipInsights, AppError> {
        let mut rng = self.rng(SALT_INSIGHTS);
        let total_vip_clients = rng.gen_range(120..=180);
        let active_today = rng.gen_range(20..=total_vip_clients / 2);
        let churn_risk_clients = rng.gen_range(2..=12);

        let insights = vec![
            AiInsight {
                category: "retention".to_string(),
                message: format!(
                    "{churn_risk_clients} VIP clients show reduced activity and may churn"
                ),
                confidence: confidence(&mut rng),
            },
            AiInsight {
                category: "revenue".to_string(),
                message: format!(
                    "Weekend volume is projected {}% above the weekday average",
                    rng.gen_range(8..=35)
                ),
                confidence: confidence(&mut rng),
            },
            AiInsight {
                category: "engagement".to_string(),
                message: format!(
                    "{} clients responded to personal host outreach this week",
                    rng.gen_range(3..=18)
                ),
                confidence: confidence(&mut rng),
            },
        ];

        let mut top_clients: Vec<CustomerSummary> = CLIENTS
            .choose_multiple(&mut rng, 5)
            .copied()
            .collect::<Vec<_>>()
            .into_iter()
            .map(|(id, name)| customer(&mut rng, id, name))
            .collect();
        top_clients.sort_by(|a, b| b.lifetime_volume.total_cmp(&a.lifetime_volume));

        Ok(VipInsights {
            total_vip_clients,
            active_today,
            revenue_today: money(rng.gen_range(DAILY_REVENUE_RANGE)),
            churn_risk_clients,
            insights,
            top_clients,
        })
    }

    async fn analytics(&self, period: AnalyticsPeriod) -> Result<VipAnalytics, AppError> {
        let mut rng = self.rng(SALT_ANALYTICS);
        let days = period.multiplier();
        let scale = f64::from(days);

        let total_revenue = money(rng.gen_range(DAILY_REVENUE_RANGE) * scale);
        let total_wagers = rng.gen_range(800..2_400) * days;
        let active_clients = rng.gen_range(40..120) + days.saturating_sub(1) * 2;
        let net_profit = money(total_revenue * rng.gen_range(0.08..0.15));
        let average_bet = money(total_revenue / f64::from(total_wagers));

        let now = Utc::now();
        let window_minutes = i64::from(days) * 24 * 60;

        let mut largest_wagers: Vec<WagerSummary> = (0..5)
            .map(|_| {
                let (customer_id, _) = pick_client(&mut rng);
                let stake = money(rng.gen_range(HIGH_VALUE_THRESHOLD..100_000.0));
                WagerSummary {
                    wager_id: format!("W{}", rng.gen_range(100_000..999_999)),
                    customer_id: customer_id.to_string(),
                    sport: SPORTS[rng.gen_range(0..SPORTS.len())].to_string(),
                    stake,
                    potential_payout: money(stake * rng.gen_range(1.5..4.0)),
                    status: WAGER_STATUSES[rng.gen_range(0..WAGER_STATUSES.len())],
                    placed_at: now - Duration::minutes(rng.gen_range(0..window_minutes)),
                }
            })
            .collect();
        largest_wagers.sort_by(|a, b| b.stake.total_cmp(&a.stake));

        let mut recent_transactions: Vec<TransactionSummary> = (0..5)
            .map(|_| {
                let (customer_id, _) = pick_client(&mut rng);
                TransactionSummary {
                    transaction_id: format!("T{}", rng.gen_range(100_000..999_999)),
                    customer_id: customer_id.to_string(),
                    kind: if rng.gen_bool(0.6) {
                        TransactionKind::Deposit
                    } else {
                        TransactionKind::Withdrawal
                    },
                    amount: money(rng.gen_range(1_000.0..50_000.0)),
                    created_at: now - Duration::minutes(rng.gen_range(0..window_minutes)),
                }
            })
            .collect();
        recent_transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(
            "Generated {:?} analytics: revenue {:.2} over {} days",
            period, total_revenue, days
        );

        Ok(VipAnalytics {
            period,
            days,
            total_revenue,
            total_wagers,
            active_clients,
            average_bet,
            net_profit,
            largest_wagers,
            recent_transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FILTERS: [ActivityFilter; 4] = [
        ActivityFilter::All,
        ActivityFilter::Vip,
        ActivityFilter::NewClients,
        ActivityFilter::HighValue,
    ];

    #[tokio::test]
    async fn test_activity_respects_every_filter() {
        for seed in 0..25 {
            let repo = MockVipRepository::new(Some(seed));
            for filter in ALL_FILTERS {
                let items = repo.activity(filter).await.unwrap();
                assert!((5..=15).contains(&items.len()));
                for item in &items {
                    assert!(
                        filter.admits(item),
                        "{:?} leaked {:?} (amount {:?})",
                        filter,
                        item.activity_type,
                        item.amount
                    );
                }
            }
        }
    }

    #[tokio::test]
    async fn test_vip_filter_never_returns_new_client_types() {
        for seed in 0..50 {
            let items = MockVipRepository::new(Some(seed))
                .activity(ActivityFilter::Vip)
                .await
                .unwrap();
            assert!(items.iter().all(|a| !matches!(
                a.activity_type,
                ActivityType::FirstDeposit | ActivityType::Registration
            )));
        }
    }

    #[tokio::test]
    async fn test_activity_sorted_newest_first() {
        let items = MockVipRepository::new(Some(7))
            .activity(ActivityFilter::All)
            .await
            .unwrap();
        assert!(items.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_analytics_scaled_by_period() {
        for seed in 0..25 {
            let repo = MockVipRepository::new(Some(seed));
            for period in [
                AnalyticsPeriod::Today,
                AnalyticsPeriod::Week,
                AnalyticsPeriod::Month,
                AnalyticsPeriod::Quarter,
            ] {
                let a = repo.analytics(period).await.unwrap();
                let m = f64::from(period.multiplier());
                assert_eq!(a.days, period.multiplier());
                assert!(a.total_revenue >= DAILY_REVENUE_RANGE.start * m);
                assert!(a.total_revenue <= DAILY_REVENUE_RANGE.end * m);
                assert!(a.net_profit >= a.total_revenue * 0.08 - 0.01);
                assert!(a.net_profit <= a.total_revenue * 0.15 + 0.01);
                assert!(a.average_bet > 0.0);
            }
        }
    }

    #[tokio::test]
    async fn test_seeded_week_is_seven_times_seeded_today() {
        // Same seed, same draw for the baseline; only the scale differs.
        let repo = MockVipRepository::new(Some(42));
        let today = repo.analytics(AnalyticsPeriod::Today).await.unwrap();
        let week = repo.analytics(AnalyticsPeriod::Week).await.unwrap();
        assert!((week.total_revenue - today.total_revenue * 7.0).abs() < 1.0);
    }

    #[tokio::test]
    async fn test_insight_confidence_in_range() {
        for seed in 0..25 {
            let insights = MockVipRepository::new(Some(seed)).insights().await.unwrap();
            assert!(!insights.insights.is_empty());
            for insight in &insights.insights {
                assert!((0.70..=0.99).contains(&insight.confidence));
            }
            assert!(insights.active_today <= insights.total_vip_clients);
            assert!(DAILY_REVENUE_RANGE.contains(&insights.revenue_today)
                || insights.revenue_today == DAILY_REVENUE_RANGE.end);
            assert_eq!(insights.top_clients.len(), 5);
        }
    }

    #[tokio::test]
    async fn test_recommendations_ordered_by_priority() {
        for seed in 0..25 {
            let recs = MockVipRepository::new(Some(seed))
                .recommendations()
                .await
                .unwrap();
            assert!(recs.len() >= 3);
            assert!(recs.windows(2).all(|w| w[0].priority <= w[1].priority));
        }
    }

    #[tokio::test]
    async fn test_seed_makes_output_reproducible() {
        let a = MockVipRepository::new(Some(9)).recommendations().await.unwrap();
        let b = MockVipRepository::new(Some(9)).recommendations().await.unwrap();
        let actions = |v: &[Recommendation]| v.iter().map(|r| r.action.clone()).collect::<Vec<_>>();
        assert_eq!(actions(&a), actions(&b));
    }

    #[tokio::test]
    async fn test_unseeded_repository_still_in_range() {
        let repo = MockVipRepository::default();
        let week = repo.analytics(AnalyticsPeriod::Week).await.unwrap();
        assert!(week.total_revenue >= 350_000.0 && week.total_revenue <= 1_050_000.0);
    }
}
