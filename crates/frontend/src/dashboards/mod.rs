pub mod d410_filtered_overview;

pub use d410_filtered_overview::ui::FilteredOverviewDashboard;
