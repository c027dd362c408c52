//! Contact page: hero, contact channels, availability and the enquiry forms.

use crate::config::SiteConfig;
use crate::models::EmployeeData;
use crate::render::components::{action_buttons, footer, header, html_head, tier_badge, NavItem};
use crate::render::markup::{escape, format_markup, Markup};
use crate::render::{document, EmployeeView};

const CONTACT_CSS: &str = r#"
.hero { display: flex; align-items: center; gap: 24px; }
.avatar { width: 88px; height: 88px; border-radius: 50%; background: var(--brand); color: #fff; display: flex; align-items: center; justify-content: center; font-size: 32px; font-weight: 700; }
.hero h1 { margin: 0 0 4px; }
.hero .role { color: var(--muted); margin: 0 0 8px; }
.method { display: flex; flex-direction: column; gap: 4px; }
.method .label { font-size: 12px; text-transform: uppercase; color: var(--muted); }
.hours td { padding: 4px 16px 4px 0; }
.vip-panel { border: 2px solid var(--vip); }
.vip-panel h2 { color: var(--vip); }
form label { display: block; margin: 12px 0 4px; font-size: 13px; }
form input, form select, form textarea { width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 6px; font: inherit; }
"#;

const CONTACT_SCRIPT: &str = r#"<script>
document.querySelectorAll('[data-copy]').forEach(function (el) {
  el.addEventListener('click', function () {
    navigator.clipboard.writeText(el.getAttribute('data-copy'));
    el.textContent = 'Copied!';
  });
});
document.getElementById('contact-form').addEventListener('submit', function (event) {
  event.preventDefault();
  alert('Thanks! Your message has been sent.');
  event.target.reset();
});
</script>"#;

const VIP_SCRIPT: &str = r#"<script>
document.getElementById('vip-support-form').addEventListener('submit', function (event) {
  event.preventDefault();
  alert('Priority request received. A VIP host will reply within 15 minutes.');
  event.target.reset();
});
</script>"#;

pub fn contact_page(employee: &EmployeeData, site: &SiteConfig) -> Markup {
    let view = EmployeeView::new(employee);
    let title = escape(&format!("Contact {} | {}", employee.name, site.company_name));

    let body = Markup::concat([
        header(&view, site, NavItem::Contact),
        Markup::literal("<main>"),
        hero(&view),
        contact_methods(&view),
        availability(),
        Markup::when(view.is_vip(), vip_hours_notice),
        Markup::when(view.is_vip(), || vip_support_form(&view)),
        contact_form(&view),
        Markup::literal("</main>"),
        footer(site),
        Markup::literal(CONTACT_SCRIPT),
        Markup::when(view.is_vip(), || Markup::literal(VIP_SCRIPT)),
    ]);

    document(html_head(&title, CONTACT_CSS), body)
}

fn hero(view: &EmployeeView) -> Markup {
    format_markup!(
        r#"<section class="card hero">
  <div class="avatar">{initials}</div>
  <div>
    <h1 class="hero-name">{name}</h1>
    <p class="role hero-title">{title} &middot; {department}</p>
    {badge}
    {actions}
  </div>
</section>"#,
        initials = view.initials,
        name = view.name,
        title = view.title,
        department = view.department,
        badge = tier_badge(view),
        actions = action_buttons(view),
    )
}

fn method(label: &'static str, value: Markup) -> Markup {
    format_markup!(
        r#"<div class="card method"><span class="label">{label}</span>{value}</div>"#,
        label = Markup::literal(label),
        value = value,
    )
}

fn contact_methods(view: &EmployeeView) -> Markup {
    let mut methods = vec![
        method(
            "Phone",
            format_markup!(
                r#"<a href="tel:{href}">{phone}</a>"#,
                href = view.phone_href,
                phone = view.phone,
            ),
        ),
        method(
            "Email",
            format_markup!(
                r#"<a href="mailto:{email}">{email}</a>"#,
                email = view.email,
            ),
        ),
    ];
    if let (Some(telegram), Some(handle)) = (&view.telegram, &view.telegram_handle) {
        methods.push(method(
            "Telegram",
            format_markup!(
                r#"<a href="https://t.me/{handle}" target="_blank" rel="noopener">{telegram}</a>"#,
                handle = handle,
                telegram = telegram,
            ),
        ));
    }
    if let Some(slack) = &view.slack {
        methods.push(method(
            "Slack",
            format_markup!("<span>{slack}</span>", slack = slack),
        ));
    }

    format_markup!(
        r#"<section class="contact-methods"><h2>Get in touch</h2><div class="grid">{methods}</div></section>"#,
        methods = Markup::concat(methods),
    )
}

fn availability() -> Markup {
    Markup::literal(
        r#"<section class="card availability">
  <h2>Office hours</h2>
  <table class="hours">
    <tr><td>Monday &ndash; Friday</td><td>09:00 &ndash; 18:00</td></tr>
    <tr><td>Saturday</td><td>10:00 &ndash; 14:00</td></tr>
    <tr><td>Sunday</td><td>Closed</td></tr>
  </table>
</section>"#,
    )
}

fn vip_hours_notice() -> Markup {
    Markup::literal(
        r#"<section class="card vip-panel" id="vip-hours">
  <h2>VIP client hours</h2>
  <p>VIP clients are served around the clock. Priority requests are answered within 15 minutes, 24/7, including holidays.</p>
</section>"#,
    )
}

fn vip_support_form(view: &EmployeeView) -> Markup {
    format_markup!(
        r#"<section class="card vip-panel">
  <h2>VIP support request</h2>
  <form id="vip-support-form" data-owner="{id}">
    <label for="vip-client-id">Client ID</label>
    <input id="vip-client-id" name="client_id" required>
    <label for="vip-priority">Priority</label>
    <select id="vip-priority" name="priority">
      <option value="urgent">Urgent</option>
      <option value="high">High</option>
      <option value="normal">Normal</option>
    </select>
    <label for="vip-details">Details</label>
    <textarea id="vip-details" name="details" rows="4" required></textarea>
    <div class="actions"><button class="button" type="submit">Send to {name}</button></div>
  </form>
</section>"#,
        id = view.id,
        name = view.name,
    )
}

fn contact_form(view: &EmployeeView) -> Markup {
    format_markup!(
        r#"<section class="card">
  <h2>Send a message</h2>
  <form id="contact-form" data-owner="{id}">
    <label for="contact-name">Your name</label>
    <input id="contact-name" name="name" required>
    <label for="contact-message">Message</label>
    <textarea id="contact-message" name="message" rows="4" required></textarea>
    <div class="actions"><button class="button" type="submit">Send</button></div>
  </form>
</section>"#,
        id = view.id,
    )
}
