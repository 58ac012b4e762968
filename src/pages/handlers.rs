use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tracing::{info, instrument};

use super::{initialize, Page, PageQuery, RecordingNavigator};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(render_page))
        .route("/index.html", get(render_page))
        .route("/detalhe.html", get(render_page))
}

#[instrument(skip(state))]
pub async fn render_page(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = PageQuery::from_pairs(&params);
    let path = uri.path();
    let Some(page) = Page::from_path(path) else {
        return (StatusCode::NOT_FOUND, "Page not found").into_response();
    };

    let mut doc = page.document();
    let mut nav = RecordingNavigator::default();
    initialize(path, &query, &mut doc, state.places.as_ref(), &mut nav).await;

    if let Some(location) = nav.location() {
        info!(%location, "redirecting");
        return Redirect::temporary(location).into_response();
    }

    Html(doc.to_html()).into_response()
}
