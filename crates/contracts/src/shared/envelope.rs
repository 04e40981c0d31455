use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used by most list and analytics endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Reference list that may come either bare or wrapped in `{data: [...]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Wrapped { data } => data,
            ListPayload::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_payload_accepts_both_shapes() {
        let bare: ListPayload<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(bare.into_vec(), vec!["a", "b"]);

        let wrapped: ListPayload<String> = serde_json::from_str(r#"{"data":["c"]}"#).unwrap();
        assert_eq!(wrapped.into_vec(), vec!["c"]);
    }
}
