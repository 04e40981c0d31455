use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a004_laundry_step::{LaundryStep, StepItemDto};
use contracts::shared::envelope::ListPayload;

pub async fn fetch_laundry_steps() -> Result<Vec<LaundryStep>, String> {
    get_json::<ListPayload<LaundryStep>>("/api/laundry-steps")
        .await
        .map(ListPayload::into_vec)
}

/// Persist one chemical of a step.
// TODO: call from the wash-recipe page once the server accepts client instance ids for step items
pub async fn create_step_item(dto: &StepItemDto) -> Result<serde_json::Value, String> {
    post_json("/api/step-items", dto).await
}
