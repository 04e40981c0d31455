use serde::{Deserialize, Serialize};

pub const ORDER_STATUS_ACTIVE: &str = "active";
pub const ORDER_STATUS_ON_HOLD: &str = "on_hold";
pub const ORDER_STATUS_COMPLETED: &str = "completed";

/// `PUT /api/orders/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdateDto {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl OrderUpdateDto {
    pub fn validate(&self) -> Result<(), String> {
        match self.status.as_str() {
            ORDER_STATUS_ACTIVE | ORDER_STATUS_ON_HOLD | ORDER_STATUS_COMPLETED => Ok(()),
            other => Err(format!("Unknown order status '{}'", other)),
        }
    }
}
