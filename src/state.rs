//! Application state.

use crate::mock::{Account, FleetMetrics};

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    Accounts,
    Settings,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Overview, Page::Accounts, Page::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Accounts => "Accounts",
            Page::Settings => "Settings",
        }
    }
}

/// Persisted settings edited on the settings page.
#[derive(Debug, Clone)]
pub struct Settings {
    pub email_alerts: bool,
    pub auto_refresh: bool,
    pub refresh_interval_secs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_alerts: true,
            auto_refresh: true,
            refresh_interval_secs: 30,
        }
    }
}

impl Settings {
    const INTERVALS: [u32; 4] = [15, 30, 60, 300];

    /// Advance the refresh interval to the next preset, wrapping around.
    pub fn cycle_refresh_interval(&mut self) {
        let index = Self::INTERVALS
            .iter()
            .position(|&v| v == self.refresh_interval_secs)
            .unwrap_or(0);
        self.refresh_interval_secs = Self::INTERVALS[(index + 1) % Self::INTERVALS.len()];
    }
}

/// Steps of the account provisioning wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Plan,
    Region,
    Confirm,
}

impl WizardStep {
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Plan => Some(WizardStep::Region),
            WizardStep::Region => Some(WizardStep::Confirm),
            WizardStep::Confirm => None,
        }
    }

    pub fn back(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Plan => None,
            WizardStep::Region => Some(WizardStep::Plan),
            WizardStep::Confirm => Some(WizardStep::Region),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Plan => "Choose a plan",
            WizardStep::Region => "Pick a region",
            WizardStep::Confirm => "Confirm provisioning",
        }
    }
}

/// The whole dashboard model.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub page: Page,
    pub metrics: FleetMetrics,
    pub accounts: Vec<Account>,
    pub selected_account: Option<u64>,
    pub settings: Settings,
    pub wizard: Option<WizardStep>,
    pub next_account_id: u64,
}

impl DashboardState {
    pub fn new(metrics: FleetMetrics, accounts: Vec<Account>) -> Self {
        let next_account_id = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            page: Page::default(),
            metrics,
            accounts,
            selected_account: None,
            settings: Settings::default(),
            wizard: None,
            next_account_id,
        }
    }

    pub fn selected(&self) -> Option<&Account> {
        self.selected_account
            .and_then(|id| self.accounts.iter().find(|a| a.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_interval_cycles_and_wraps() {
        let mut settings = Settings::default();
        assert_eq!(settings.refresh_interval_secs, 30);
        settings.cycle_refresh_interval();
        assert_eq!(settings.refresh_interval_secs, 60);
        settings.cycle_refresh_interval();
        assert_eq!(settings.refresh_interval_secs, 300);
        settings.cycle_refresh_interval();
        assert_eq!(settings.refresh_interval_secs, 15);
    }

    #[test]
    fn test_wizard_step_order() {
        assert_eq!(WizardStep::Plan.next(), Some(WizardStep::Region));
        assert_eq!(WizardStep::Confirm.next(), None);
        assert_eq!(WizardStep::Plan.back(), None);
        assert_eq!(WizardStep::Confirm.back(), Some(WizardStep::Region));
    }
}
