//! Dashboard Use Cases

pub mod get_dashboard_summary;

pub use get_dashboard_summary::{DashboardSummary, GetDashboardSummaryUseCase};
