pub mod date_range_picker;
pub mod pagination_controls;
pub mod sortable_header_cell;
pub mod stat_card;
pub mod ui;
