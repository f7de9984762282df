//! Application message types.
//!
//! All UI events and actions are represented as messages in the Elm
//! architecture style.

use crate::state::Page;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    /// Switch to a top-level page
    PageSelected(Page),

    // Accounts
    /// Accounts list scrolled to a new offset
    AccountsScrolled(f32),
    /// Account row clicked
    AccountSelected(u64),
    /// Append a synthetic account to the list
    AddAccount,

    // Settings
    /// Toggle email alert delivery
    ToggleAlerts,
    /// Toggle automatic data refresh
    ToggleAutoRefresh,
    /// Cycle the refresh interval through its presets
    CycleRefreshInterval,

    // Provisioning wizard
    /// Open the provisioning wizard modal
    WizardOpened,
    /// Advance the wizard one step
    WizardNext,
    /// Go back one wizard step
    WizardBack,
    /// Dismiss the wizard without finishing
    WizardCancelled,
    /// Complete the wizard and provision the account
    WizardFinished,
}
