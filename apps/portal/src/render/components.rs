//! Shared page chrome used by every generator.

use crate::config::SiteConfig;
use crate::directory::ToolInfo;
use crate::render::markup::{escape, format_markup, Escaped, Markup};
use crate::render::EmployeeView;

const BASE_CSS: &str = r#"
:root { --brand: #e4572e; --ink: #1d1d1f; --muted: #6e6e73; --card: #ffffff; --bg: #f5f5f7; --vip: #b8860b; }
* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: var(--ink); background: var(--bg); }
a { color: var(--brand); text-decoration: none; }
.site-header { display: flex; align-items: center; justify-content: space-between; padding: 16px 32px; background: var(--ink); color: #fff; }
.site-header nav a { color: #fff; margin-left: 20px; opacity: 0.8; }
.site-header nav a.active { opacity: 1; border-bottom: 2px solid var(--brand); }
.brand { font-weight: 700; letter-spacing: 0.04em; }
main { max-width: 1080px; margin: 0 auto; padding: 32px; }
.card { background: var(--card); border-radius: 12px; padding: 24px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); margin-bottom: 24px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
.badge { display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 12px; background: #eee; }
.badge.vip { background: var(--vip); color: #fff; }
.actions { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 16px; }
.button { display: inline-block; padding: 10px 18px; border-radius: 8px; background: var(--brand); color: #fff; border: none; cursor: pointer; font-size: 14px; }
.button.secondary { background: #fff; color: var(--ink); border: 1px solid #ddd; }
.site-footer { text-align: center; color: var(--muted); font-size: 13px; padding: 32px; }
"#;

/// Which navigation entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Contact,
    Tools,
    Profile,
}

pub fn html_head(title: &Escaped, page_css: &'static str) -> Markup {
    format_markup!(
        "<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n<style>{base}{page}</style>\n</head>",
        title = title,
        base = Markup::literal(BASE_CSS),
        page = Markup::literal(page_css),
    )
}

pub fn header(view: &EmployeeView, site: &SiteConfig, active: NavItem) -> Markup {
    let class = |item: NavItem| {
        if item == active {
            Markup::literal(" class=\"active\"")
        } else {
            Markup::empty()
        }
    };

    format_markup!(
        r#"<header class="site-header">
  <span class="brand">{company} Staff</span>
  <nav>
    <a href="/contact/{id}"{contact}>Contact</a>
    <a href="/tools/{id}"{tools}>Tools</a>
    <a href="/profile/{id}"{profile}>Profile</a>
  </nav>
</header>"#,
        company = escape(&site.company_name),
        id = view.id,
        contact = class(NavItem::Contact),
        tools = class(NavItem::Tools),
        profile = class(NavItem::Profile),
    )
}

pub fn footer(site: &SiteConfig) -> Markup {
    format_markup!(
        r#"<footer class="site-footer">
  &copy; {company} &middot; Staff Portal &middot; <a href="mailto:{support}">{support}</a>
</footer>"#,
        company = escape(&site.company_name),
        support = escape(&site.support_email),
    )
}

pub fn tier_badge(view: &EmployeeView) -> Markup {
    let class = if view.is_vip() {
        Markup::literal("badge vip")
    } else {
        Markup::literal("badge")
    };
    format_markup!(
        r#"<span class="{class}">Tier {tier} &middot; {label}</span>"#,
        class = class,
        tier = view.tier(),
        label = escape(view.data.tier.label()),
    )
}

/// Call / email / chat shortcuts. Channels the employee has not set are omitted.
pub fn action_buttons(view: &EmployeeView) -> Markup {
    let mut buttons = vec![
        format_markup!(
            r#"<a class="button" href="tel:{href}">Call</a>"#,
            href = view.phone_href,
        ),
        format_markup!(
            r#"<a class="button secondary" href="mailto:{email}">Email</a>"#,
            email = view.email,
        ),
    ];
    if let Some(handle) = &view.telegram_handle {
        buttons.push(format_markup!(
            r#"<a class="button secondary" href="https://t.me/{handle}" target="_blank" rel="noopener">Telegram</a>"#,
            handle = handle,
        ));
    }
    if let Some(slack) = &view.slack {
        buttons.push(format_markup!(
            r#"<button class="button secondary" type="button" data-copy="{slack}">Copy Slack</button>"#,
            slack = slack,
        ));
    }

    format_markup!(
        r#"<div class="actions">{buttons}</div>"#,
        buttons = Markup::concat(buttons),
    )
}

/// Cards linking to each tool; VIP-only tools are dropped below tier 5.
pub fn tool_cards(view: &EmployeeView, tools: &[ToolInfo]) -> Markup {
    let cards = tools
        .iter()
        .filter(|t| !t.vip_only || view.is_vip())
        .map(|t| {
            format_markup!(
                r#"<a class="card tool-card" href="/tools/{id}/{slug}">
  <div class="tool-icon">{icon}</div>
  <h3>{name}</h3>
  <p>{description}</p>
</a>"#,
                id = view.id,
                slug = escape(t.slug),
                icon = escape(t.icon),
                name = escape(t.name),
                description = escape(t.description),
            )
        });

    format_markup!(
        r#"<div class="grid tool-grid">{cards}</div>"#,
        cards = Markup::concat(cards),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::tools_for_department;
    use crate::render::test_support::employee;

    #[test]
    fn test_header_marks_active_item() {
        let data = employee(3);
        let view = EmployeeView::new(&data);
        let html = header(&view, &SiteConfig::default(), NavItem::Tools).into_string();
        assert!(html.contains(r#"<a href="/tools/sarah-chen" class="active">Tools</a>"#));
        assert!(html.contains(r#"<a href="/contact/sarah-chen">Contact</a>"#));
    }

    #[test]
    fn test_action_buttons_skip_missing_channels() {
        let mut data = employee(2);
        data.telegram = None;
        data.slack = None;
        let view = EmployeeView::new(&data);
        let html = action_buttons(&view).into_string();
        assert!(html.contains("tel:+15550102245"));
        assert!(html.contains("mailto:sarah.chen@fire22.com"));
        assert!(!html.contains("t.me"));
        assert!(!html.contains("data-copy"));
    }

    #[test]
    fn test_tool_cards_hide_vip_only_below_tier_five() {
        let tools = tools_for_department(crate::models::Department::VipServices);

        let data = employee(4);
        let html = tool_cards(&EmployeeView::new(&data), &tools).into_string();
        assert!(!html.contains("/vip-crm"));
        assert!(html.contains("/tools/sarah-chen/analytics"));

        let data = employee(5);
        let html = tool_cards(&EmployeeView::new(&data), &tools).into_string();
        assert!(html.contains("/tools/sarah-chen/vip-crm"));
    }

    #[test]
    fn test_footer_escapes_company_name() {
        let site = SiteConfig {
            company_name: "A&B".to_string(),
            support_email: "help@example.com".to_string(),
        };
        let html = footer(&site).into_string();
        assert!(html.contains("A&amp;B"));
    }
}
