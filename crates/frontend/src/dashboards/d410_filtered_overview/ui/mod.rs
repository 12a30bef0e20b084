pub mod dashboard;

pub use dashboard::FilteredOverviewDashboard;
