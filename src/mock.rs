//! Bundled demo data for the dashboard.
//!
//! The dashboard is a front end without a backend here, so accounts and
//! fleet metrics come from a JSON file embedded at compile time.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

const MOCK_DATA: &str = include_str!("../assets/mock_data.json");

/// Health of a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Healthy,
    Degraded,
    Critical,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Healthy => "healthy",
            AccountStatus::Degraded => "degraded",
            AccountStatus::Critical => "critical",
        }
    }
}

/// One customer account row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub plan: String,
    pub status: AccountStatus,
    pub monthly_spend: f64,
    pub region: String,
}

/// Fleet-wide metrics shown on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetMetrics {
    pub active_accounts: u32,
    pub open_incidents: u32,
    pub uptime_pct: f64,
    pub events_today: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockData {
    pub metrics: FleetMetrics,
    pub accounts: Vec<Account>,
}

/// Parse the bundled data set.
pub fn load() -> Result<MockData, AppError> {
    let data: MockData = serde_json::from_str(MOCK_DATA)?;
    log::debug!(
        "loaded mock data: {} accounts, {} open incidents",
        data.accounts.len(),
        data.metrics.open_incidents
    );
    Ok(data)
}

/// Synthesize an extra account, used to demonstrate live list growth.
pub fn synthetic_account(id: u64) -> Account {
    Account {
        id,
        name: format!("synthetic-tenant-{id}"),
        plan: "trial".to_string(),
        status: AccountStatus::Healthy,
        monthly_spend: 0.0,
        region: "eu-west-1".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_parses() {
        let data = load().expect("bundled data must parse");
        assert!(data.accounts.len() >= 20);
        assert!(data.metrics.active_accounts as usize >= data.accounts.len());
    }

    #[test]
    fn test_status_roundtrip() {
        let json = serde_json::to_string(&AccountStatus::Degraded).expect("serialize");
        assert_eq!(json, "\"degraded\"");
        let back: AccountStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, AccountStatus::Degraded);
    }
}
