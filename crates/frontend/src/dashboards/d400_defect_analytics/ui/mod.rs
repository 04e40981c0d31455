mod charts;
mod dashboard;

pub use charts::{BarChart, TrendChart};
pub use dashboard::DefectAnalyticsDashboard;
