//! Page shells for the navigational routes.
//!
//! Every route here sits behind the access gate. The client bundle
//! hydrates the `#app` root; the server only provides the document.

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::http::server::AppState;

/// A page known to the front-end: route, document title and root id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub title: &'static str,
    pub view: &'static str,
}

pub const DASHBOARD: Page = Page {
    path: "/dashboard",
    title: "Dashboard",
    view: "dashboard",
};
pub const SEARCH: Page = Page {
    path: "/search",
    title: "Lead Search",
    view: "search",
};
pub const SAVED_SEARCHES: Page = Page {
    path: "/searches/saved",
    title: "Saved Searches",
    view: "saved-searches",
};
pub const RECENT_SEARCHES: Page = Page {
    path: "/searches/recent",
    title: "Recent Searches",
    view: "recent-searches",
};
pub const LOGIN: Page = Page {
    path: "/auth/login",
    title: "Sign In",
    view: "login",
};
pub const REGISTER: Page = Page {
    path: "/auth/register",
    title: "Create Account",
    view: "register",
};

pub const PAGES: [Page; 6] = [DASHBOARD, SEARCH, SAVED_SEARCHES, RECENT_SEARCHES, LOGIN, REGISTER];

const NOT_FOUND: Page = Page {
    path: "",
    title: "Page Not Found",
    view: "not-found",
};

/// Render the HTML document for a page.
pub fn render(page: &Page) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title} | Lead Intelligence</title>\n",
            "<link rel=\"icon\" href=\"/favicon.ico\">\n",
            "</head>\n",
            "<body>\n",
            "<div id=\"app\" data-view=\"{view}\"></div>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = page.title,
        view = page.view,
    )
}

pub async fn dashboard() -> Html<String> {
    Html(render(&DASHBOARD))
}

pub async fn search() -> Html<String> {
    Html(render(&SEARCH))
}

pub async fn saved_searches() -> Html<String> {
    Html(render(&SAVED_SEARCHES))
}

pub async fn recent_searches() -> Html<String> {
    Html(render(&RECENT_SEARCHES))
}

pub async fn login() -> Html<String> {
    Html(render(&LOGIN))
}

pub async fn register() -> Html<String> {
    Html(render(&REGISTER))
}

/// `/` has no page of its own; send the visitor to the landing page.
pub async fn root(State(state): State<AppState>) -> Response {
    let policy = state.gate.load();
    (StatusCode::TEMPORARY_REDIRECT, [(LOCATION, policy.landing_path().to_string())]).into_response()
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render(&NOT_FOUND))).into_response()
}
