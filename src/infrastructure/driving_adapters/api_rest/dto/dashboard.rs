//! Dashboard DTO

use serde::Serialize;

use crate::application::use_cases::dashboard::DashboardSummary;

/// Dashboard response DTO with the fleet counters and the session visit count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponseDto {
    pub num_drivers: u64,
    pub num_cars: u64,
    pub num_manufacturers: u64,
    pub num_visits: u64,
}

impl DashboardResponseDto {
    /// Combine the fleet counters with the per-session visit count
    #[must_use]
    pub fn new(summary: DashboardSummary, num_visits: u64) -> Self {
        Self {
            num_drivers: summary.num_drivers,
            num_cars: summary.num_cars,
            num_manufacturers: summary.num_manufacturers,
            num_visits,
        }
    }
}
