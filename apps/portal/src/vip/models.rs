use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::fire22::{CustomerSummary, TransactionSummary, WagerSummary};

/// Minimum amount for an activity to count as high value.
pub const HIGH_VALUE_THRESHOLD: f64 = 10_000.0;

// ────────────────────────────────────────────────────────────────────────────
// Insights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VipInsights {
    pub total_vip_clients: u32,
    pub active_today: u32,
    pub revenue_today: f64,
    pub churn_risk_clients: u32,
    pub insights: Vec<AiInsight>,
    pub top_clients: Vec<CustomerSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub category: String,
    pub message: String,
    pub confidence: f64, // 0.70 – 0.99
}

// ────────────────────────────────────────────────────────────────────────────
// Activity
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    LargeBet,
    Deposit,
    Withdrawal,
    Login,
    TierUpgrade,
    FirstDeposit,
    Registration,
}

impl ActivityType {
    /// Whether the activity carries a money amount.
    pub fn is_monetary(self) -> bool {
        matches!(
            self,
            ActivityType::LargeBet
                | ActivityType::Deposit
                | ActivityType::Withdrawal
                | ActivityType::FirstDeposit
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientActivity {
    pub id: Uuid,
    pub customer_id: String,
    pub client_name: String,
    pub activity_type: ActivityType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Which slice of the activity feed to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFilter {
    #[default]
    All,
    Vip,
    NewClients,
    HighValue,
}

impl ActivityFilter {
    /// Unknown or empty values fall back to `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("vip") => ActivityFilter::Vip,
            Some("new-clients") => ActivityFilter::NewClients,
            Some("high-value") => ActivityFilter::HighValue,
            _ => ActivityFilter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityFilter::All => "all",
            ActivityFilter::Vip => "vip",
            ActivityFilter::NewClients => "new-clients",
            ActivityFilter::HighValue => "high-value",
        }
    }

    /// The activity types this filter may return.
    /// `FirstDeposit` and `Registration` belong to `NewClients` only.
    pub fn types(self) -> &'static [ActivityType] {
        use ActivityType::{
            Deposit, FirstDeposit, LargeBet, Login, Registration, TierUpgrade, Withdrawal,
        };
        match self {
            ActivityFilter::All => &[
                LargeBet,
                Deposit,
                Withdrawal,
                Login,
                TierUpgrade,
                FirstDeposit,
                Registration,
            ],
            ActivityFilter::Vip => &[LargeBet, Deposit, Withdrawal, Login, TierUpgrade],
            ActivityFilter::NewClients => &[FirstDeposit, Registration],
            ActivityFilter::HighValue => &[LargeBet, Deposit, Withdrawal],
        }
    }

    pub fn admits(self, activity: &ClientActivity) -> bool {
        if !self.types().contains(&activity.activity_type) {
            return false;
        }
        match self {
            ActivityFilter::HighValue => activity
                .amount
                .is_some_and(|amount| amount >= HIGH_VALUE_THRESHOLD),
            _ => true,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub customer_id: String,
    pub client_name: String,
    pub action: String,
    pub reason: String,
    pub priority: Priority,
    pub confidence: f64,
    pub expected_value: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Analytics
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    #[default]
    Today,
    Week,
    Month,
    Quarter,
}

impl AnalyticsPeriod {
    /// Unknown or empty values fall back to `Today`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("week") => AnalyticsPeriod::Week,
            Some("month") => AnalyticsPeriod::Month,
            Some("quarter") => AnalyticsPeriod::Quarter,
            _ => AnalyticsPeriod::Today,
        }
    }

    /// Scale applied to the single-day baseline figures.
    pub fn multiplier(self) -> u32 {
        match self {
            AnalyticsPeriod::Today => 1,
            AnalyticsPeriod::Week => 7,
            AnalyticsPeriod::Month => 30,
            AnalyticsPeriod::Quarter => 90,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VipAnalytics {
    pub period: AnalyticsPeriod,
    pub days: u32,
    pub total_revenue: f64,
    pub total_wagers: u32,
    pub active_clients: u32,
    pub average_bet: f64,
    pub net_profit: f64,
    pub largest_wagers: Vec<WagerSummary>,
    pub recent_transactions: Vec<TransactionSummary>,
}
