//! HTTP handlers of the web UI

use crate::server::page::{render_page, PageView};
use crate::server::AppState;
use axum::{extract::Extension, http::StatusCode, response::Html, Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};

/// Form posted by the "start" button
#[derive(Debug, Deserialize)]
pub struct DigestForm {
    #[serde(default)]
    pub topic: String,
}

/// `GET /`: topic selector
pub async fn index_handler(Extension(state): Extension<AppState>) -> Html<String> {
    Html(render_page(&state.themes, &PageView::default()))
}

/// `POST /digest`: runs a digest and renders its results
pub async fn digest_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<DigestForm>,
) -> (StatusCode, Html<String>) {
    let topic = form.topic.trim();

    if topic.is_empty() {
        let view = PageView {
            warning: Some("Veuillez sélectionner un thème pour continuer".to_string()),
            ..PageView::default()
        };
        return (
            StatusCode::BAD_REQUEST,
            Html(render_page(&state.themes, &view)),
        );
    }

    tracing::info!("Digest requested for '{}'", topic);

    match state.service.run(topic).await {
        Ok(report) => {
            let view = PageView {
                selected: Some(topic),
                report: Some(&report),
                ..PageView::default()
            };
            (StatusCode::OK, Html(render_page(&state.themes, &view)))
        }
        Err(e) => {
            let view = PageView {
                selected: Some(topic),
                error: Some(format!("Erreur lors de l'analyse : {}", e)),
                ..PageView::default()
            };
            (
                StatusCode::BAD_GATEWAY,
                Html(render_page(&state.themes, &view)),
            )
        }
    }
}

/// `GET /api/themes`: theme list as JSON
pub async fn themes_handler(Extension(state): Extension<AppState>) -> Json<Value> {
    Json(json!(state.themes.as_ref()))
}

/// `GET /health`: liveness probe
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "themes": state.themes.themes.len(),
        "speech": state.service.speech_enabled(),
    }))
}
