//! HTML page routes. Rendering is synchronous and pure; handlers only look up
//! the employee and pick the generator.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::models::EmployeeData;
use crate::render::{contact_page, not_found_page, profile_page, tools_page, Markup};
use crate::state::AppState;

fn render_for(
    state: &AppState,
    id: &str,
    render: impl FnOnce(&EmployeeData) -> Markup,
) -> Response {
    match state.directory.get(id) {
        Some(employee) => {
            let page = render(employee);
            debug!("Rendered {} bytes for '{id}'", page.as_str().len());
            Html(page.into_string()).into_response()
        }
        None => {
            debug!("No employee with id '{id}'");
            page_not_found(state, &format!("No staff member is listed under '{id}'."))
        }
    }
}

pub fn page_not_found(state: &AppState, message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(&state.site, message).into_string()),
    )
        .into_response()
}

/// GET /contact/:id
pub async fn handle_contact(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    render_for(&state, &id, |employee| contact_page(employee, &state.site))
}

/// GET /profile/:id
pub async fn handle_profile(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    render_for(&state, &id, |employee| profile_page(employee, &state.site))
}

/// GET /tools/:id and GET /tools/:id/*rest
///
/// Only the segments after the id select the tools view.
pub async fn handle_tools(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
) -> Response {
    let id = params.get("id").map(String::as_str).unwrap_or_default();
    let subpath = params.get("rest").map(String::as_str).unwrap_or_default();
    render_for(&state, id, |employee| tools_page(employee, subpath, &state.site))
}
