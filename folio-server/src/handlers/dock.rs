use axum::{
    Json,
    extract::{Query, State},
};
use folio_core::{DockContext, DockLayout, build_dock};
use serde::Deserialize;

use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct DockQuery {
    #[serde(default)]
    pub signed_in: bool,
    #[serde(default)]
    pub sidebar_open: bool,
}

impl From<DockQuery> for DockContext {
    fn from(query: DockQuery) -> Self {
        DockContext {
            signed_in: query.signed_in,
            sidebar_open: query.sidebar_open,
        }
    }
}

/// Navigation dock for the current visitor
///
/// # Response
///
/// Both layouts of the dock:
///
/// ```json
/// {
///   "compact":  { "visible": [...], "hidden": [...], "overflowed": true },
///   "expanded": { "visible": [...], "hidden": [],    "overflowed": false }
/// }
/// ```
///
/// `null` when no navigation is configured, in which case the dock is not
/// rendered. The partition is recomputed on every request.
pub async fn get_dock_handler(
    State(state): State<AppState>,
    Query(query): Query<DockQuery>,
) -> AppResult<Json<Option<DockLayout>>> {
    let entries = state.cms.navigation().await?;
    let layout =
        build_dock(&entries, query.into(), state.dock_thresholds());
    Ok(Json(layout))
}
