pub mod d400_defect_analytics;

pub use d400_defect_analytics::ui::DefectAnalyticsDashboard;
