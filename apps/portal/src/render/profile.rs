use crate::config::SiteConfig;
use crate::directory::tools_for_department;
use crate::models::EmployeeData;
use crate::render::components::{action_buttons, footer, header, html_head, tier_badge, NavItem};
use crate::render::markup::{escape, format_markup, Escaped, Markup};
use crate::render::{document, EmployeeView};

const PROFILE_CSS: &str = r#"
.profile { display: grid; grid-template-columns: 120px 1fr; gap: 24px; align-items: center; }
.avatar { width: 120px; height: 120px; border-radius: 50%; background: var(--ink); color: #fff; display: flex; align-items: center; justify-content: center; font-size: 40px; font-weight: 700; }
dl { display: grid; grid-template-columns: 140px 1fr; gap: 8px 16px; margin: 0; }
dt { color: var(--muted); }
dd { margin: 0; }
.vip-privileges { border: 2px solid var(--vip); }
.vip-privileges li { margin: 6px 0; }
"#;

const DEFAULT_BIO: &str = "No bio provided yet.";

pub fn profile_page(employee: &EmployeeData, site: &SiteConfig) -> Markup {
    let view = EmployeeView::new(employee);
    let title = escape(&format!("{} | {}", employee.name, site.company_name));

    let body = Markup::concat([
        header(&view, site, NavItem::Profile),
        Markup::literal("<main>"),
        profile_card(&view),
        about(&view),
        details(&view),
        Markup::when(view.is_vip(), vip_privileges),
        Markup::literal("</main>"),
        footer(site),
    ]);

    document(html_head(&title, PROFILE_CSS), body)
}

fn profile_card(view: &EmployeeView) -> Markup {
    format_markup!(
        r#"<section class="card profile">
  <div class="avatar">{initials}</div>
  <div>
    <h1>{name}</h1>
    <p>{title}</p>
    {badge}
    {actions}
  </div>
</section>"#,
        initials = view.initials,
        name = view.name,
        title = view.title,
        badge = tier_badge(view),
        actions = action_buttons(view),
    )
}

fn about(view: &EmployeeView) -> Markup {
    let bio = match &view.bio {
        Some(bio) => Markup::from(bio.clone()),
        None => Markup::literal(DEFAULT_BIO),
    };
    format_markup!(
        r#"<section class="card about"><h2>About</h2><p class="bio">{bio}</p></section>"#,
        bio = bio,
    )
}

fn details(view: &EmployeeView) -> Markup {
    let optional = |label: &'static str, value: &Option<Escaped>| match value {
        Some(v) => format_markup!(
            "<dt>{label}</dt><dd>{value}</dd>",
            label = Markup::literal(label),
            value = v,
        ),
        None => Markup::empty(),
    };
    let tool_count = tools_for_department(view.data.department)
        .iter()
        .filter(|t| !t.vip_only || view.is_vip())
        .count();

    format_markup!(
        r#"<section class="card details">
  <h2>Details</h2>
  <dl>
    <dt>Department</dt><dd>{department}</dd>
    <dt>Tier</dt><dd>{tier} ({label})</dd>
    <dt>Email</dt><dd><a href="mailto:{email}">{email}</a></dd>
    <dt>Phone</dt><dd><a href="tel:{phone_href}">{phone}</a></dd>
    {telegram}{slack}
    <dt>Tools</dt><dd><a href="/tools/{id}">{tool_count} available</a></dd>
  </dl>
</section>"#,
        department = view.department,
        tier = view.tier(),
        label = escape(view.data.tier.label()),
        email = view.email,
        phone_href = view.phone_href,
        phone = view.phone,
        telegram = optional("Telegram", &view.telegram),
        slack = optional("Slack", &view.slack),
        id = view.id,
        tool_count = tool_count,
    )
}

fn vip_privileges() -> Markup {
    Markup::literal(
        r#"<section class="card vip-privileges" id="vip-privileges">
  <h2>VIP privileges</h2>
  <ul>
    <li>Access to the VIP CRM dashboard and client insights</li>
    <li>Authority to approve bespoke limits and hospitality requests</li>
    <li>Listed on the 24/7 VIP escalation rota</li>
  </ul>
</section>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{count, employee};

    #[test]
    fn test_vip_privileges_only_for_tier_five() {
        let site = SiteConfig::default();
        assert!(profile_page(&employee(5), &site)
            .as_str()
            .contains(r#"id="vip-privileges""#));
        for tier in 1..=4 {
            assert!(!profile_page(&employee(tier), &site)
                .as_str()
                .contains(r#"id="vip-privileges""#));
        }
    }

    #[test]
    fn test_missing_bio_uses_default() {
        let mut data = employee(2);
        data.bio = None;
        let html = profile_page(&data, &SiteConfig::default()).into_string();
        assert!(html.contains(DEFAULT_BIO));
    }

    #[test]
    fn test_bio_is_escaped() {
        let mut data = employee(2);
        data.bio = Some("<b>bold</b> & brave".to_string());
        let html = profile_page(&data, &SiteConfig::default()).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;&#x2F;b&gt; &amp; brave"));
    }

    #[test]
    fn test_tool_count_respects_tier() {
        let site = SiteConfig::default();
        // vip-services: analytics, reports, vip-crm (VIP only), hosting
        assert!(profile_page(&employee(5), &site)
            .as_str()
            .contains("4 available"));
        assert!(profile_page(&employee(3), &site)
            .as_str()
            .contains("3 available"));
    }

    #[test]
    fn test_single_html_root_and_determinism() {
        let data = employee(4);
        let site = SiteConfig::default();
        let html = profile_page(&data, &site);
        assert_eq!(count(html.as_str(), "<html"), 1);
        assert_eq!(count(html.as_str(), "</html>"), 1);
        assert_eq!(html, profile_page(&data, &site));
    }
}
