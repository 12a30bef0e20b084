pub mod date_range_select;
pub mod filter_panel;
pub mod multi_select_filter;
