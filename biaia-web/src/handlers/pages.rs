//! Page handlers rendered through the application shell

use axum::extract::State;
use axum::response::Html;

use crate::server::{AppState, PLACES_ROUTE};
use crate::templates::home_content;

/// `GET /` - landing page.
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    let content = home_content(state.shell.metadata(), PLACES_ROUTE);
    Html(state.shell.render(&content))
}
