use axum::{Json, extract::State};
use folio_core::{SkillGroup, group_skills};

use crate::infra::{app_state::AppState, errors::AppResult};

/// Skills grouped into one chart per category
pub async fn get_skills_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SkillGroup>>> {
    let skills = state.cms.skills().await?;
    Ok(Json(group_skills(&skills)))
}
