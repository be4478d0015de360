//! # Process Tracking Handlers

use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::tracking::UnitProcessStatus;
use crate::web::errors::ApiResult;
use crate::web::state::AppState;

/// All assigned PCBs with their current, previous and next process steps and
/// the operators qualified for each: GET /pcb-process-tracking
pub async fn pcb_process_tracking(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UnitProcessStatus>>> {
    info!("Building PCB process tracking report");

    let report = state.tracking_service.pcb_process_tracking().await?;
    Ok(Json(report))
}
