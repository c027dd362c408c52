use std::fmt;

use serde::{Deserialize, Serialize};

/// Access tier of a staff member, 1 (lowest) to 5 (VIP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const VIP: Tier = Tier(5);

    pub fn new(value: u8) -> Result<Self, InvalidTier> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Tier(value))
        } else {
            Err(InvalidTier(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Only the top tier unlocks the VIP sections.
    pub fn is_vip(self) -> bool {
        self == Self::VIP
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Associate",
            2 => "Specialist",
            3 => "Senior",
            4 => "Lead",
            _ => "VIP",
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::new(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tier must be between 1 and 5, got {0}")]
pub struct InvalidTier(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Management,
    Finance,
    CustomerSupport,
    Compliance,
    Operations,
    Technology,
    Marketing,
    Sportsbook,
    VipServices,
}

impl Department {
    pub const ALL: [Department; 9] = [
        Department::Management,
        Department::Finance,
        Department::CustomerSupport,
        Department::Compliance,
        Department::Operations,
        Department::Technology,
        Department::Marketing,
        Department::Sportsbook,
        Department::VipServices,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Department::Management => "management",
            Department::Finance => "finance",
            Department::CustomerSupport => "customer-support",
            Department::Compliance => "compliance",
            Department::Operations => "operations",
            Department::Technology => "technology",
            Department::Marketing => "marketing",
            Department::Sportsbook => "sportsbook",
            Department::VipServices => "vip-services",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Department::Management => "Management",
            Department::Finance => "Finance",
            Department::CustomerSupport => "Customer Support",
            Department::Compliance => "Compliance",
            Department::Operations => "Operations",
            Department::Technology => "Technology",
            Department::Marketing => "Marketing",
            Department::Sportsbook => "Sportsbook",
            Department::VipServices => "VIP Services",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.slug() == slug)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A staff member as stored in the directory. Read-only input to the page renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeData {
    /// URL slug, unique within the directory.
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: Department,
    pub tier: Tier,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl EmployeeData {
    pub fn is_vip(&self) -> bool {
        self.tier.is_vip()
    }
}
