pub mod d400_defect_analytics;
