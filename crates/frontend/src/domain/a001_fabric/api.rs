use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use contracts::domain::a001_fabric::{
    CompositionItem, Fabric, FabricDto, FabricListQuery, FabricListResponse, Supplier,
};
use contracts::shared::envelope::ListPayload;

/// `/api/fabrics?page=..&limit=..&sortField=..&sortOrder=..&search=..`
pub fn list_path(query: &FabricListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("/api/fabrics?{}", qs),
        _ => "/api/fabrics".to_string(),
    }
}

pub async fn fetch_fabrics(query: &FabricListQuery) -> Result<FabricListResponse, String> {
    get_json(&list_path(query)).await
}

pub async fn fetch_fabric(id: &str) -> Result<Fabric, String> {
    get_json(&format!("/api/fabrics/{}", urlencoding::encode(id))).await
}

pub async fn create_fabric(dto: &FabricDto) -> Result<Fabric, String> {
    post_json("/api/fabrics", dto).await
}

pub async fn update_fabric(id: &str, dto: &FabricDto) -> Result<Fabric, String> {
    put_json(&format!("/api/fabrics/{}", urlencoding::encode(id)), dto).await
}

pub async fn delete_fabric(id: &str) -> Result<(), String> {
    delete(&format!("/api/fabrics/{}", urlencoding::encode(id))).await
}

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    get_json::<ListPayload<Supplier>>("/api/suppliers")
        .await
        .map(ListPayload::into_vec)
}

pub async fn fetch_composition_items() -> Result<Vec<CompositionItem>, String> {
    get_json::<ListPayload<CompositionItem>>("/api/composition-items")
        .await
        .map(ListPayload::into_vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_fabric::SortOrder;

    #[test]
    fn test_list_path_uses_wire_names() {
        let mut query = FabricListQuery::default();
        assert_eq!(
            list_path(&query),
            "/api/fabrics?page=1&limit=20&sortField=name&sortOrder=asc"
        );

        query.toggle_sort("name");
        query.search = "den".into();
        query.page = 3;
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(
            list_path(&query),
            "/api/fabrics?page=3&limit=20&sortField=name&sortOrder=desc&search=den"
        );
    }
}
