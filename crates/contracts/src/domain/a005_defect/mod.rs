use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Major,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Major => "major",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Major => "Major",
            Severity::Critical => "Critical",
            Severity::Unknown => "—",
        }
    }

    pub fn all() -> [Severity; 3] {
        [Severity::Minor, Severity::Major, Severity::Critical]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl DefectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefectStatus::Open => "open",
            DefectStatus::InProgress => "in_progress",
            DefectStatus::Resolved => "resolved",
            DefectStatus::Closed => "closed",
            DefectStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DefectStatus::Open => "Open",
            DefectStatus::InProgress => "In progress",
            DefectStatus::Resolved => "Resolved",
            DefectStatus::Closed => "Closed",
            DefectStatus::Unknown => "—",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "open" => DefectStatus::Open,
            "in_progress" => DefectStatus::InProgress,
            "resolved" => DefectStatus::Resolved,
            "closed" => DefectStatus::Closed,
            _ => DefectStatus::Unknown,
        }
    }

    pub fn all() -> [DefectStatus; 4] {
        [
            DefectStatus::Open,
            DefectStatus::InProgress,
            DefectStatus::Resolved,
            DefectStatus::Closed,
        ]
    }

    /// Resolved and closed defects need a resolution note
    pub fn requires_resolution(&self) -> bool {
        matches!(self, DefectStatus::Resolved | DefectStatus::Closed)
    }
}

/// Дефект, зафиксированный контролем качества
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    pub status: DefectStatus,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub reported_at: Option<String>,
}

/// `PUT /api/defects/:id/resolution`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectResolutionDto {
    pub status: DefectStatus,
    pub resolution: String,
}

impl DefectResolutionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.status == DefectStatus::Unknown {
            return Err("Select a status".into());
        }
        if self.status.requires_resolution() && self.resolution.trim().is_empty() {
            return Err("Describe how the defect was resolved".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_values_do_not_fail() {
        let json = r#"{"_id":"d1","severity":"cosmetic","status":"archived","category":"Stitching"}"#;
        let defect: Defect = serde_json::from_str(json).unwrap();
        assert_eq!(defect.severity, Severity::Unknown);
        assert_eq!(defect.status, DefectStatus::Unknown);
    }

    #[test]
    fn test_resolution_required_when_resolving() {
        let dto = DefectResolutionDto {
            status: DefectStatus::Resolved,
            resolution: " ".into(),
        };
        assert!(dto.validate().is_err());

        let dto = DefectResolutionDto {
            status: DefectStatus::InProgress,
            resolution: String::new(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&DefectStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(DefectStatus::from_str("in_progress"), DefectStatus::InProgress);
    }
}
