// Server-side page rendering.
// Every generator is a pure function of its inputs: no clock, RNG or global
// state is read, so identical inputs produce byte-identical documents.

pub mod components;
pub mod contact;
pub mod markup;
pub mod profile;
pub mod tools;

pub use contact::contact_page;
pub use markup::Markup;

use markup::{escape, Escaped};
pub use profile::profile_page;
pub use tools::tools_page;

use crate::models::EmployeeData;

/// An employee record with every display field escaped once, up front.
/// Page templates only ever see this view, never the raw record.
#[derive(Debug, Clone)]
pub struct EmployeeView<'a> {
    pub data: &'a EmployeeData,
    pub id: Escaped,
    pub name: Escaped,
    pub title: Escaped,
    pub department: Escaped,
    pub initials: Escaped,
    pub phone: Escaped,
    /// Digits and a leading `+` only, for `tel:` links.
    pub phone_href: Escaped,
    pub email: Escaped,
    pub telegram: Option<Escaped>,
    /// Handle without the leading `@`, for `t.me` links.
    pub telegram_handle: Option<Escaped>,
    pub slack: Option<Escaped>,
    pub bio: Option<Escaped>,
}

impl<'a> EmployeeView<'a> {
    pub fn new(data: &'a EmployeeData) -> Self {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        // A bare "@" has no handle to link to.
        let telegram = non_empty(&data.telegram)
            .filter(|t| !t.trim_start_matches('@').trim().is_empty());

        Self {
            data,
            id: escape(&data.id),
            name: escape(&data.name),
            title: escape(&data.title),
            department: escape(data.department.label()),
            initials: escape(&initials(&data.name)),
            phone: escape(&data.phone),
            phone_href: escape(&phone_href(&data.phone)),
            email: escape(&data.email),
            telegram_handle: telegram
                .as_deref()
                .map(|t| escape(t.trim_start_matches('@'))),
            telegram: telegram.as_deref().map(escape),
            slack: non_empty(&data.slack).as_deref().map(escape),
            bio: non_empty(&data.bio).as_deref().map(escape),
        }
    }

    pub fn is_vip(&self) -> bool {
        self.data.is_vip()
    }

    pub fn tier(&self) -> u8 {
        self.data.tier.value()
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn phone_href(phone: &str) -> String {
    phone
        .chars()
        .enumerate()
        .filter(|&(i, c)| c.is_ascii_digit() || (i == 0 && c == '+'))
        .map(|(_, c)| c)
        .collect()
}

/// Wraps a head and body into a complete document with a single `<html>` root.
pub fn document(head: Markup, body: Markup) -> Markup {
    markup::format_markup!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{head}\n<body>\n{body}\n</body>\n</html>\n",
        head = head,
        body = body,
    )
}

const NOT_FOUND_CSS: &str = ".not-found { text-align: center; padding: 64px 24px; }";

/// Standalone 404 document for page routes.
pub fn not_found_page(site: &crate::config::SiteConfig, message: &str) -> Markup {
    let body = markup::format_markup!(
        r#"<main><section class="card not-found">
  <h1>Page not found</h1>
  <p>{message}</p>
  <p><a href="mailto:{support}">Contact {company} support</a></p>
</section></main>"#,
        message = escape(message),
        support = escape(&site.support_email),
        company = escape(&site.company_name),
    );
    let title = escape(&format!("Not found | {}", site.company_name));
    document(components::html_head(&title, NOT_FOUND_CSS), body)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{Department, EmployeeData, Tier};

    pub fn employee(tier: u8) -> EmployeeData {
        EmployeeData {
            id: "sarah-chen".to_string(),
            name: "Sarah Chen".to_string(),
            title: "VIP Account Director".to_string(),
            department: Department::VipServices,
            tier: Tier::new(tier).unwrap(),
            phone: "+1 (555) 010-2245".to_string(),
            email: "sarah.chen@fire22.com".to_string(),
            telegram: Some("@sarah_vip".to_string()),
            slack: Some("@sarah.chen".to_string()),
            bio: Some("Owns relationships with high-value clients.".to_string()),
        }
    }

    pub fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }
}
