use crate::shared::api_utils::get_json;
use contracts::dashboards::d400_defect_analytics::{
    AnalyticsQuery, AnalyticsSummary, CountEntry, TopCategory,
};
use contracts::shared::envelope::DataEnvelope;

/// `/api/analytics/analytics?startDate=..&endDate=..[&severity=..][&status=..]`
pub fn analytics_path(query: &AnalyticsQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("/api/analytics/analytics?{}", qs),
        _ => "/api/analytics/analytics".to_string(),
    }
}

pub fn top_path(category: TopCategory, limit: usize) -> String {
    format!("/api/analytics/top/{}/{}", category.as_path(), limit)
}

pub async fn fetch_analytics(query: &AnalyticsQuery) -> Result<AnalyticsSummary, String> {
    query.validate()?;
    get_json::<DataEnvelope<AnalyticsSummary>>(&analytics_path(query))
        .await
        .map(|envelope| envelope.data)
}

pub async fn fetch_top(category: TopCategory, limit: usize) -> Result<Vec<CountEntry>, String> {
    get_json::<DataEnvelope<Vec<CountEntry>>>(&top_path(category, limit))
        .await
        .map(|envelope| envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_analytics_path_omits_blank_filters() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let query = AnalyticsQuery::last_days(today).with_filters("major", "");
        assert_eq!(
            analytics_path(&query),
            "/api/analytics/analytics?startDate=2024-05-31&endDate=2024-06-30&severity=major"
        );
    }

    #[test]
    fn test_top_path() {
        assert_eq!(top_path(TopCategory::Category, 10), "/api/analytics/top/category/10");
    }
}
