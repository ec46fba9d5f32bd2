use crate::dtos::CalculatorListResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};

pub async fn list_calculators(State(state): State<AppState>) -> Json<CalculatorListResponse> {
    Json(CalculatorListResponse {
        calculators: state.calculators.list_calculators(),
    })
}
