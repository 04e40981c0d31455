use crate::shared::api_utils::{get_json, put};
use contracts::domain::a005_defect::{Defect, DefectResolutionDto};
use contracts::shared::envelope::ListPayload;

pub async fn fetch_defects() -> Result<Vec<Defect>, String> {
    get_json::<ListPayload<Defect>>("/api/defects")
        .await
        .map(ListPayload::into_vec)
}

pub async fn resolve_defect(id: &str, dto: &DefectResolutionDto) -> Result<(), String> {
    dto.validate()?;
    put(
        &format!("/api/defects/{}/resolution", urlencoding::encode(id)),
        dto,
    )
    .await
}
