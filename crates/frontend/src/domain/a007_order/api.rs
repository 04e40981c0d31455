use crate::shared::api_utils::put;
use contracts::domain::a007_order::OrderUpdateDto;

pub async fn update_order(order_id: &str, dto: &OrderUpdateDto) -> Result<(), String> {
    dto.validate()?;
    put(&format!("/api/orders/{}", urlencoding::encode(order_id)), dto).await
}
