use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-side token minted when an entry is created.
///
/// Never sent as a server reference id; used only to find an entry again
/// after the collection was reordered, filtered or resequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InstanceId)
            .map_err(|e| format!("Invalid instance id: {}", e))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_ids_are_unique() {
        assert_ne!(InstanceId::new(), InstanceId::new());
    }

    #[test]
    fn test_string_round_trip() {
        let id = InstanceId::new();
        assert_eq!(InstanceId::from_string(&id.as_string()), Ok(id));
        assert!(InstanceId::from_string("not-a-uuid").is_err());
    }
}
