//! Tools dashboard. The request path picks one of a fixed set of views.

use crate::config::SiteConfig;
use crate::directory::tools_for_department;
use crate::models::EmployeeData;
use crate::render::components::{footer, header, html_head, tier_badge, tool_cards, NavItem};
use crate::render::markup::{escape, format_markup, Markup};
use crate::render::{document, EmployeeView};

const TOOLS_CSS: &str = r#"
.tool-card { display: block; color: var(--ink); }
.tool-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.12); }
.tool-icon { font-size: 28px; }
.breadcrumb { color: var(--muted); font-size: 13px; margin-bottom: 16px; }
.metric { font-size: 28px; font-weight: 700; }
.metric-label { font-size: 12px; text-transform: uppercase; color: var(--muted); }
.filters button { margin-right: 8px; }
.filters button.active { background: var(--ink); color: #fff; }
.feed { list-style: none; padding: 0; margin: 0; }
.feed li { padding: 8px 0; border-bottom: 1px solid #eee; }
.restricted { border-left: 4px solid var(--brand); }
"#;

/// Polls the analytics endpoint; the numbers are cosmetic.
const ANALYTICS_SCRIPT: &str = r#"<script>
(function () {
  var period = 'today';
  function money(n) { return '$' + Math.round(n).toLocaleString(); }
  function refresh() {
    fetch('/api/vip/analytics?period=' + period)
      .then(function (r) { return r.json(); })
      .then(function (d) {
        document.getElementById('metric-revenue').textContent = money(d.totalRevenue);
        document.getElementById('metric-wagers').textContent = d.totalWagers.toLocaleString();
        document.getElementById('metric-clients').textContent = d.activeClients.toLocaleString();
        document.getElementById('metric-profit').textContent = money(d.netProfit);
      })
      .catch(function () {});
  }
  document.querySelectorAll('[data-period]').forEach(function (btn) {
    btn.addEventListener('click', function () {
      period = btn.getAttribute('data-period');
      document.querySelectorAll('[data-period]').forEach(function (b) { b.classList.remove('active'); });
      btn.classList.add('active');
      refresh();
    });
  });
  refresh();
  setInterval(refresh, 30000);
})();
</script>"#;

const CRM_SCRIPT: &str = r#"<script>
(function () {
  var filter = 'all';
  function get(path) { return fetch(path).then(function (r) { return r.json(); }); }
  function list(id, items, line) {
    var el = document.getElementById(id);
    el.innerHTML = '';
    items.forEach(function (item) {
      var li = document.createElement('li');
      li.textContent = line(item);
      el.appendChild(li);
    });
  }
  function refreshInsights() {
    get('/api/vip/insights').then(function (d) {
      document.getElementById('crm-total').textContent = d.totalVipClients;
      document.getElementById('crm-active').textContent = d.activeToday;
      document.getElementById('crm-revenue').textContent = '$' + Math.round(d.revenueToday).toLocaleString();
      document.getElementById('crm-churn').textContent = d.churnRiskClients;
      list('crm-insights', d.insights, function (i) { return i.message + ' (' + Math.round(i.confidence * 100) + '%)'; });
    }).catch(function () {});
  }
  function refreshActivity() {
    get('/api/vip/activity?filter=' + filter).then(function (items) {
      list('crm-activity', items, function (a) { return a.clientName + ': ' + a.description; });
    }).catch(function () {});
  }
  function refreshRecommendations() {
    get('/api/vip/recommendations').then(function (items) {
      list('crm-recommendations', items, function (r) { return '[' + r.priority + '] ' + r.clientName + ': ' + r.action; });
    }).catch(function () {});
  }
  document.querySelectorAll('[data-filter]').forEach(function (btn) {
    btn.addEventListener('click', function () {
      filter = btn.getAttribute('data-filter');
      document.querySelectorAll('[data-filter]').forEach(function (b) { b.classList.remove('active'); });
      btn.classList.add('active');
      refreshActivity();
    });
  });
  refreshInsights();
  refreshActivity();
  refreshRecommendations();
  setInterval(refreshInsights, 60000);
  setInterval(refreshActivity, 15000);
  setInterval(refreshRecommendations, 120000);
})();
</script>"#;

/// The view selected by the part of a tools URL after the employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolsView {
    Overview,
    Analytics,
    Reports,
    VipCrm,
}

impl ToolsView {
    /// First matching keyword wins; anything unrecognised is the overview.
    pub fn from_subpath(subpath: &str) -> Self {
        if subpath.contains("analytics") {
            ToolsView::Analytics
        } else if subpath.contains("reports") {
            ToolsView::Reports
        } else if subpath.contains("vip-crm") {
            ToolsView::VipCrm
        } else {
            ToolsView::Overview
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ToolsView::Overview => "Tools",
            ToolsView::Analytics => "Analytics",
            ToolsView::Reports => "Reports",
            ToolsView::VipCrm => "VIP CRM",
        }
    }
}

/// `subpath` is everything after `/tools/{id}/`, empty for the overview.
pub fn tools_page(employee: &EmployeeData, subpath: &str, site: &SiteConfig) -> Markup {
    let view = EmployeeView::new(employee);
    let selected = ToolsView::from_subpath(subpath);
    let title = escape(&format!(
        "{} | {} | {}",
        selected.heading(),
        employee.name,
        site.company_name
    ));

    let body = Markup::concat([
        header(&view, site, NavItem::Tools),
        Markup::literal("<main>"),
        intro(&view, selected),
        tools_content(&view, selected),
        Markup::literal("</main>"),
        footer(site),
    ]);

    document(html_head(&title, TOOLS_CSS), body)
}

fn intro(view: &EmployeeView, selected: ToolsView) -> Markup {
    let crumb = Markup::when(selected != ToolsView::Overview, || {
        format_markup!(
            r#" / {heading}"#,
            heading = escape(selected.heading())
        )
    });

    format_markup!(
        r#"<div class="breadcrumb"><a href="/tools/{id}">Tools</a>{crumb}</div>
<section class="card">
  <h1>{heading}</h1>
  <p>{name} &middot; {department} {badge}</p>
</section>"#,
        id = view.id,
        crumb = crumb,
        heading = escape(selected.heading()),
        name = view.name,
        department = view.department,
        badge = tier_badge(view),
    )
}

fn tools_content(view: &EmployeeView, selected: ToolsView) -> Markup {
    match selected {
        ToolsView::Overview => overview(view),
        ToolsView::Analytics => analytics(),
        ToolsView::Reports => reports(view),
        ToolsView::VipCrm if view.is_vip() => vip_crm(),
        ToolsView::VipCrm => access_restricted(view),
    }
}

fn overview(view: &EmployeeView) -> Markup {
    let tools = tools_for_department(view.data.department);
    format_markup!(
        r#"<section class="tool-overview">{cards}</section>"#,
        cards = tool_cards(view, &tools),
    )
}

fn analytics() -> Markup {
    Markup::concat([
        Markup::literal(
            r#"<section class="card analytics-view">
  <div class="filters">
    <button class="button secondary active" type="button" data-period="today">Today</button>
    <button class="button secondary" type="button" data-period="week">Week</button>
    <button class="button secondary" type="button" data-period="month">Month</button>
    <button class="button secondary" type="button" data-period="quarter">Quarter</button>
  </div>
  <div class="grid">
    <div><div class="metric-label">Revenue</div><div class="metric" id="metric-revenue">&ndash;</div></div>
    <div><div class="metric-label">Wagers</div><div class="metric" id="metric-wagers">&ndash;</div></div>
    <div><div class="metric-label">Active clients</div><div class="metric" id="metric-clients">&ndash;</div></div>
    <div><div class="metric-label">Net profit</div><div class="metric" id="metric-profit">&ndash;</div></div>
  </div>
</section>"#,
        ),
        Markup::literal(ANALYTICS_SCRIPT),
    ])
}

fn reports(view: &EmployeeView) -> Markup {
    let rows = ["Daily summary", "Weekly performance", "Monthly statement"]
        .into_iter()
        .map(|report| {
            format_markup!(
                r#"<li><strong>{report}</strong> &middot; {department}</li>"#,
                report = escape(report),
                department = view.department,
            )
        });

    format_markup!(
        r#"<section class="card reports-view">
  <h2>Available reports</h2>
  <ul class="feed">{rows}</ul>
</section>"#,
        rows = Markup::concat(rows),
    )
}

fn vip_crm() -> Markup {
    Markup::concat([
        Markup::literal(
            r#"<section class="card vip-crm" id="vip-crm-dashboard">
  <div class="grid">
    <div><div class="metric-label">VIP clients</div><div class="metric" id="crm-total">&ndash;</div></div>
    <div><div class="metric-label">Active today</div><div class="metric" id="crm-active">&ndash;</div></div>
    <div><div class="metric-label">Revenue today</div><div class="metric" id="crm-revenue">&ndash;</div></div>
    <div><div class="metric-label">Churn risk</div><div class="metric" id="crm-churn">&ndash;</div></div>
  </div>
</section>
<section class="card">
  <h2>AI insights</h2>
  <ul class="feed" id="crm-insights"></ul>
</section>
<section class="card">
  <h2>Client activity</h2>
  <div class="filters">
    <button class="button secondary active" type="button" data-filter="all">All</button>
    <button class="button secondary" type="button" data-filter="vip">VIP</button>
    <button class="button secondary" type="button" data-filter="new-clients">New clients</button>
    <button class="button secondary" type="button" data-filter="high-value">High value</button>
  </div>
  <ul class="feed" id="crm-activity"></ul>
</section>
<section class="card">
  <h2>Recommendations</h2>
  <ul class="feed" id="crm-recommendations"></ul>
</section>"#,
        ),
        Markup::literal(CRM_SCRIPT),
    ])
}

fn access_restricted(view: &EmployeeView) -> Markup {
    format_markup!(
        r#"<section class="card restricted" id="access-restricted">
  <h2>Access restricted</h2>
  <p>The VIP CRM is available to tier 5 staff. Your current tier is {tier}.</p>
  <p><a href="/tools/{id}">Back to tools</a></p>
</section>"#,
        tier = view.tier(),
        id = view.id,
    )
}
