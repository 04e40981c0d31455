use crate::shared::api_utils::get_json;
use contracts::domain::a002_chemical_item::ChemicalItem;
use contracts::shared::envelope::ListPayload;

pub async fn fetch_chemical_items() -> Result<Vec<ChemicalItem>, String> {
    get_json::<ListPayload<ChemicalItem>>("/api/chemical-items")
        .await
        .map(ListPayload::into_vec)
}
