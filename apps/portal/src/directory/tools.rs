//! Department tool catalog — which dashboard tools each department sees.

use crate::models::Department;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Hidden from the cards of employees below tier 5.
    pub vip_only: bool,
}

const fn tool(
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
) -> ToolInfo {
    ToolInfo {
        slug,
        name,
        description,
        icon,
        vip_only: false,
    }
}

const COMMON_TOOLS: &[ToolInfo] = &[
    tool("analytics", "Analytics", "Live performance metrics for your area", "📊"),
    tool("reports", "Reports", "Scheduled and ad-hoc exports", "📄"),
];

fn department_tools(department: Department) -> Vec<ToolInfo> {
    match department {
        Department::Management => vec![
            tool("kpi-board", "KPI Board", "Company-wide targets and progress", "🎯"),
            ToolInfo {
                vip_only: true,
                ..tool("vip-crm", "VIP CRM", "High-value client insights", "💎")
            },
        ],
        Department::Finance => vec![
            tool("settlements", "Settlements", "Agent settlement runs", "💰"),
            tool("cashier", "Cashier Review", "Pending deposits and withdrawals", "🏦"),
        ],
        Department::CustomerSupport => vec![
            tool("tickets", "Ticket Queue", "Open customer conversations", "🎫"),
            tool("knowledge-base", "Knowledge Base", "Canned answers and policies", "📚"),
        ],
        Department::Compliance => vec![
            tool("kyc", "KYC Review", "Identity verification queue", "🛡️"),
            tool("audit-log", "Audit Log", "Account and limit changes", "🔍"),
        ],
        Department::Operations => vec![tool("shifts", "Shift Planner", "Rota and coverage", "🗓️")],
        Department::Technology => vec![
            tool("status", "System Status", "Service health and incidents", "🖥️"),
            tool("deployments", "Deployments", "Release history", "🚀"),
        ],
        Department::Marketing => vec![tool("campaigns", "Campaigns", "Promotions and bonuses", "📣")],
        Department::Sportsbook => vec![
            tool("lines", "Line Manager", "Odds and limits per event", "🏈"),
            tool("risk", "Risk Monitor", "Exposure by event", "⚠️"),
        ],
        Department::VipServices => vec![
            ToolInfo {
                vip_only: true,
                ..tool("vip-crm", "VIP CRM", "High-value client insights", "💎")
            },
            tool("hosting", "Client Hosting", "Events and hospitality requests", "🥂"),
        ],
    }
}

/// Common tools followed by the department's own, in display order.
pub fn tools_for_department(department: Department) -> Vec<ToolInfo> {
    let mut tools = COMMON_TOOLS.to_vec();
    tools.extend(department_tools(department));
    tools
}
