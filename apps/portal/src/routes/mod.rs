pub mod directory;
pub mod health;
pub mod pages;

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::vip::handlers as vip;

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Unmatched API paths get the JSON error body; everything else the HTML 404 page.
async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        AppError::EndpointNotFound.into_response()
    } else {
        pages::page_not_found(&state, "The page you requested does not exist.")
    }
}

/// API endpoints answer only GET; any other method is reported as an unknown endpoint.
async fn api_method_fallback() -> AppError {
    AppError::EndpointNotFound
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Staff pages
        .route("/contact/:id", get(pages::handle_contact))
        .route("/profile/:id", get(pages::handle_profile))
        .route("/tools/:id", get(pages::handle_tools))
        .route("/tools/:id/*rest", get(pages::handle_tools))
        // Directory API
        .route(
            "/api/employees",
            get(directory::handle_list_employees).fallback(api_method_fallback),
        )
        .route(
            "/api/employees/:id",
            get(directory::handle_get_employee).fallback(api_method_fallback),
        )
        // VIP CRM API
        .route(
            "/api/vip/insights",
            get(vip::handle_insights).fallback(api_method_fallback),
        )
        .route(
            "/api/vip/activity",
            get(vip::handle_activity).fallback(api_method_fallback),
        )
        .route(
            "/api/vip/recommendations",
            get(vip::handle_recommendations).fallback(api_method_fallback),
        )
        .route(
            "/api/vip/analytics",
            get(vip::handle_analytics).fallback(api_method_fallback),
        )
        .fallback(fallback)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt; // for `collect`
    use serde_json::Value;
    use tower::ServiceExt; // for `oneshot`

    use super::*;
    use crate::config::SiteConfig;
    use crate::directory::EmployeeDirectory;
    use crate::vip::models::{
        ActivityFilter, AnalyticsPeriod, ClientActivity, Recommendation,
        VipAnalytics, VipInsights,
    };
    use crate::vip::mock::DAILY_REVENUE_RANGE;
    use crate::vip::{AnalyticsRepository, ClientActivityRepository};

    fn app() -> Router {
        let state = AppState::with_mock_vip(
            EmployeeDirectory::seed().unwrap(),
            SiteConfig::default(),
            Some(1),
        );
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, content_type, body) = get(app, uri).await;
        assert!(content_type.starts_with("application/json"), "{uri}: {content_type}");
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "staff-portal");
    }

    #[tokio::test]
    async fn test_vip_insights() {
        let (status, body) = get_json(app(), "/api/vip/insights").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["totalVipClients"].is_u64());
        assert!(body["insights"].as_array().is_some_and(|a| !a.is_empty()));
        assert_eq!(body["topClients"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn test_vip_activity_filter_vip() {
        let (status, body) = get_json(app(), "/api/vip/activity?filter=vip").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert!(!items.is_empty());
        for item in items {
            let kind = item["activityType"].as_str().unwrap();
            assert_ne!(kind, "first_deposit");
            assert_ne!(kind, "registration");
        }
    }

    #[tokio::test]
    async fn test_vip_activity_new_clients() {
        let (_, body) = get_json(app(), "/api/vip/activity?filter=new-clients").await;
        for item in body.as_array().unwrap() {
            let kind = item["activityType"].as_str().unwrap();
            assert!(kind == "first_deposit" || kind == "registration", "{kind}");
        }
    }

    #[tokio::test]
    async fn test_vip_activity_without_filter_defaults_to_all() {
        let (status, body) = get_json(app(), "/api/vip/activity").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().is_some());
    }

    #[tokio::test]
    async fn test_vip_recommendations() {
        let (status, body) = get_json(app(), "/api/vip/recommendations").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert!(items.len() >= 3);
        assert!(items[0]["priority"].is_string());
    }

    #[tokio::test]
    async fn test_vip_analytics_week_scaled() {
        let (status, body) = get_json(app(), "/api/vip/analytics?period=week").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "week");
        assert_eq!(body["days"], 7);
        let revenue = body["totalRevenue"].as_f64().unwrap();
        assert!(revenue >= DAILY_REVENUE_RANGE.start * 7.0);
        assert!(revenue <= DAILY_REVENUE_RANGE.end * 7.0);
        assert!(body["netProfit"].as_f64().unwrap() < revenue);
    }

    #[tokio::test]
    async fn test_vip_analytics_unknown_period_is_today() {
        let (_, body) = get_json(app(), "/api/vip/analytics?period=decade").await;
        assert_eq!(body["period"], "today");
        assert_eq!(body["days"], 1);
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        for uri in ["/api/vip/unknown", "/api/vip", "/api/nothing/here"] {
            let (status, body) = get_json(app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["error"], "Endpoint not found");
        }
    }

    #[tokio::test]
    async fn test_bare_api_path_is_json_404() {
        let (status, body) = get_json(app(), "/api").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Endpoint not found");

        // Only the `/api` segment counts, not any path sharing the prefix.
        let (status, content_type, _) = get(app(), "/apiary").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_non_get_api_request_is_json_404() {
        for (method, uri) in [
            ("POST", "/api/vip/insights"),
            ("DELETE", "/api/vip/analytics"),
            ("PUT", "/api/vip/activity"),
            ("POST", "/api/vip/recommendations"),
            ("POST", "/api/employees"),
            ("PATCH", "/api/employees/sarah-chen"),
        ] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
            let body = response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body["error"], "Endpoint not found", "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn test_repeated_activity_filter_uses_last_value() {
        let (status, body) = get_json(app(), "/api/vip/activity?filter=new-clients&filter=vip").await;
        assert_eq!(status, StatusCode::OK);
        for item in body.as_array().unwrap() {
            let kind = item["activityType"].as_str().unwrap();
            assert!(kind != "first_deposit" && kind != "registration", "{kind}");
        }

        let (status, body) = get_json(app(), "/api/vip/analytics?period=week&period=month").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "month");
    }

    #[tokio::test]
    async fn test_unknown_page_is_html_404() {
        let (status, content_type, body) = get(app(), "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_contact_page_route() {
        let (status, content_type, body) = get(app(), "/contact/sarah-chen").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("Sarah Chen"));
        assert!(body.contains(r#"id="vip-support-form""#));
    }

    #[tokio::test]
    async fn test_contact_page_route_non_vip() {
        let (status, _, body) = get(app(), "/contact/priya-nair").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("vip-support-form"));
    }

    #[tokio::test]
    async fn test_unknown_employee_is_404_page() {
        let (status, content_type, body) = get(app(), "/profile/nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("nobody"));
    }

    #[tokio::test]
    async fn test_tools_routes_select_view() {
        let (status, _, body) = get(app(), "/tools/sarah-chen/vip-crm").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="vip-crm-dashboard""#));

        let (_, _, body) = get(app(), "/tools/marcus-webb/vip-crm").await;
        assert!(body.contains(r#"id="access-restricted""#));

        let (_, _, body) = get(app(), "/tools/marcus-webb").await;
        assert!(body.contains("/tools/marcus-webb/settlements"));
    }

    #[tokio::test]
    async fn test_tools_view_ignores_keywords_in_employee_id() {
        let mut employee = crate::render::test_support::employee(3);
        employee.id = "reports-desk".to_string();
        let state = AppState::with_mock_vip(
            EmployeeDirectory::from_employees(vec![employee]).unwrap(),
            SiteConfig::default(),
            Some(1),
        );

        let (status, _, body) = get(build_router(state.clone()), "/tools/reports-desk").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("tool-grid"));
        assert!(!body.contains("reports-view"));

        let (_, _, body) = get(build_router(state), "/tools/reports-desk/reports").await;
        assert!(body.contains("reports-view"));
    }

    #[tokio::test]
    async fn test_pages_are_byte_identical_across_requests() {
        for uri in ["/contact/william-harris", "/profile/william-harris", "/tools/william-harris/analytics"] {
            let (_, _, first) = get(app(), uri).await;
            let (_, _, second) = get(app(), uri).await;
            assert_eq!(first, second, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_list_employees_filters() {
        let (status, body) = get_json(app(), "/api/employees?tier=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let employees = body["data"].as_array().unwrap();
        assert!(!employees.is_empty());
        assert!(employees.iter().all(|e| e["tier"] == 5));

        let (_, body) = get_json(app(), "/api/employees?department=finance").await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_list_employees_rejects_bad_filters() {
        let (status, body) = get_json(app(), "/api/employees?tier=9").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("tier"));

        let (status, _) = get_json(app(), "/api/employees?department=legal").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        for uri in [
            "/api/employees?tier=abc",
            "/api/employees?tier=300",
            "/api/employees?tier=-1",
        ] {
            let (status, body) = get_json(app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].as_str().unwrap().contains("tier"), "{uri}");
        }

        let (status, body) = get_json(app(), "/api/employees?tier=5&tier=4").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_employee() {
        let (status, body) = get_json(app(), "/api/employees/diego-alvarez").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["department"], "technology");

        let (status, body) = get_json(app(), "/api/employees/ghost").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    struct FailingRepository;

    #[async_trait]
    impl ClientActivityRepository for FailingRepository {
        async fn activity(&self, _filter: ActivityFilter) -> Result<Vec<ClientActivity>, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("activity source offline")))
        }

        async fn recommendations(&self) -> Result<Vec<Recommendation>, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("recommendation source offline")))
        }
    }

    #[async_trait]
    impl AnalyticsRepository for FailingRepository {
        async fn insights(&self) -> Result<VipInsights, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("insight source offline")))
        }

        async fn analytics(&self, _period: AnalyticsPeriod) -> Result<VipAnalytics, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("analytics source offline")))
        }
    }

    #[tokio::test]
    async fn test_repository_failure_is_generic_500() {
        let failing = Arc::new(FailingRepository);
        let state = AppState {
            directory: Arc::new(EmployeeDirectory::seed().unwrap()),
            site: Arc::new(SiteConfig::default()),
            activity: failing.clone(),
            analytics: failing,
        };

        for uri in [
            "/api/vip/insights",
            "/api/vip/activity?filter=vip",
            "/api/vip/recommendations",
            "/api/vip/analytics?period=week",
        ] {
            let (status, body) = get_json(build_router(state.clone()), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body["error"], "Internal server error");
        }
    }
}
