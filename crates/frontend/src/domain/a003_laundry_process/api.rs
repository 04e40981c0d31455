use crate::shared::api_utils::get_json;
use contracts::domain::a003_laundry_process::LaundryProcess;
use contracts::shared::envelope::ListPayload;

pub async fn fetch_laundry_processes() -> Result<Vec<LaundryProcess>, String> {
    get_json::<ListPayload<LaundryProcess>>("/api/laundry-processes")
        .await
        .map(ListPayload::into_vec)
}
