use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default reporting window in days
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Filters for `GET /api/analytics/analytics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    /// Format "YYYY-MM-DD"
    pub start_date: String,
    /// Format "YYYY-MM-DD"
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AnalyticsQuery {
    /// Last [`DEFAULT_WINDOW_DAYS`] days ending at `today`
    pub fn last_days(today: NaiveDate) -> Self {
        let start = today - Duration::days(DEFAULT_WINDOW_DAYS);
        Self {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: today.format("%Y-%m-%d").to_string(),
            severity: None,
            status: None,
        }
    }

    /// Empty strings from the filter selects mean "no filter"
    pub fn with_filters(mut self, severity: &str, status: &str) -> Self {
        self.severity = Some(severity.trim().to_string()).filter(|s| !s.is_empty());
        self.status = Some(status.trim().to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .map_err(|_| "Invalid start date".to_string())?;
        let end = NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d")
            .map_err(|_| "Invalid end date".to_string())?;
        if start > end {
            return Err("Start date must not be after end date".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountEntry {
    #[serde(alias = "_id", alias = "category")]
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(alias = "_id")]
    pub date: String,
    pub count: u64,
}

/// Body of `{data: ...}` returned by the analytics endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSummary {
    pub total_defects: u64,
    pub open_defects: u64,
    pub resolved_defects: u64,
    pub by_category: Vec<CountEntry>,
    pub by_severity: Vec<CountEntry>,
    pub by_status: Vec<CountEntry>,
    pub trend: Vec<TrendPoint>,
}

impl AnalyticsSummary {
    /// Share of resolved defects in percent, 0 when there are none
    pub fn resolution_rate(&self) -> f64 {
        share_percent(self.resolved_defects, self.total_defects)
    }
}

/// Grouping dimension for `GET /api/analytics/top/:category/:limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopCategory {
    Category,
    Severity,
    Status,
}

impl TopCategory {
    pub fn as_path(&self) -> &'static str {
        match self {
            TopCategory::Category => "category",
            TopCategory::Severity => "severity",
            TopCategory::Status => "status",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TopCategory::Category => "Category",
            TopCategory::Severity => "Severity",
            TopCategory::Status => "Status",
        }
    }

    pub fn from_path(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_path() == s)
    }

    pub fn all() -> [TopCategory; 3] {
        [
            TopCategory::Category,
            TopCategory::Severity,
            TopCategory::Status,
        ]
    }
}

/// Bar length relative to the largest value, in `0.0..=1.0`
pub fn bar_ratio(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64).min(1.0)
}

/// `part / total` in percent, rounded to one decimal
pub fn share_percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / total as f64).round() / 10.0
}

/// Largest count in a series, used to scale charts
pub fn max_count<'a>(counts: impl IntoIterator<Item = &'a u64>) -> u64 {
    counts.into_iter().copied().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let q = AnalyticsQuery::last_days(today);
        assert_eq!(q.start_date, "2024-02-14");
        assert_eq!(q.end_date, "2024-03-15");
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let q = AnalyticsQuery {
            start_date: "2024-05-02".into(),
            end_date: "2024-05-01".into(),
            severity: None,
            status: None,
        };
        assert!(q.validate().is_err());

        let q = AnalyticsQuery {
            start_date: "bad".into(),
            ..q
        };
        assert_eq!(q.validate(), Err("Invalid start date".to_string()));
    }

    #[test]
    fn test_blank_filters_are_omitted() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let q = AnalyticsQuery::last_days(today).with_filters("", "open");
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("severity").is_none());
        assert_eq!(json["status"], "open");
        assert_eq!(json["startDate"], "2024-01-01");
    }

    #[test]
    fn test_summary_tolerates_missing_sections() {
        let json = r#"{"totalDefects":4,"resolvedDefects":1,"byCategory":[{"_id":"Stitching","count":3}]}"#;
        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_defects, 4);
        assert_eq!(summary.by_category[0].name, "Stitching");
        assert!(summary.trend.is_empty());
        assert_eq!(summary.resolution_rate(), 25.0);
    }

    #[test]
    fn test_chart_helpers() {
        assert_eq!(bar_ratio(5, 0), 0.0);
        assert_eq!(bar_ratio(5, 10), 0.5);
        assert_eq!(share_percent(1, 3), 33.3);
        assert_eq!(max_count(&[3, 9, 4]), 9);
        assert_eq!(max_count(&Vec::<u64>::new()), 0);
        assert_eq!(TopCategory::from_path("severity"), Some(TopCategory::Severity));
    }
}
