pub mod dto;

pub use dto::{
    bar_ratio, max_count, share_percent, AnalyticsQuery, AnalyticsSummary, CountEntry, TopCategory,
    TrendPoint,
};
