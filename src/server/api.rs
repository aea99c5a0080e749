use axum::extract::{Query, State};
use axum::Json;
use log::debug;
use serde::Serialize;

use crate::catalog::WeaponOption;
use crate::lookup::view::{render_with, RenderedView, ViewState};
use crate::server::routes::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub strategy: &'static str,
    pub weapons: usize,
    pub attachments: usize,
    pub loaded_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponsResponse {
    pub weapons: Vec<WeaponOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = &state.catalog;
    Json(HealthResponse {
        status: "ok",
        service: "loadout-api",
        version: env!("CARGO_PKG_VERSION"),
        strategy: catalog.kind().as_str(),
        weapons: catalog.weapons().len(),
        attachments: catalog.attachments().len(),
        loaded_at: catalog.loaded_at().to_string(),
    })
}

pub async fn weapons(State(state): State<AppState>) -> Json<WeaponsResponse> {
    Json(WeaponsResponse {
        weapons: state.catalog.weapon_options(),
    })
}

pub async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories().to_vec(),
    })
}

/// `GET /api/view?weapon=&category=&keyword=` — one full join + filter + render.
pub async fn view(
    State(state): State<AppState>,
    Query(view_state): Query<ViewState>,
) -> Json<RenderedView> {
    let rendered = render_with(&state.catalog, &view_state, &|names: &[String]| {
        if !names.is_empty() {
            debug!("default loadout: {}", names.join(", "));
        }
    });
    Json(rendered)
}
