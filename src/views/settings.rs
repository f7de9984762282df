//! Settings page: a small form of toggles.

use opsdeck_ui::prelude::*;
use opsdeck_ui::{Column, Padding, Row};

use crate::message::Message;
use crate::state::Settings;
use crate::theme::Theme;

fn toggle_row(theme: &Theme, label: &str, enabled: bool, message: Message) -> Row<Message> {
    let state_label = if enabled { "on" } else { "off" };
    let state_color = if enabled { theme.ok } else { theme.text_dim };
    row()
        .spacing(12.0)
        .push(text(label).size(14.0).color(theme.text))
        .push(text(state_label).size(14.0).color(state_color))
        .push(button("Toggle").on_press(move |_| message.clone()))
}

/// Build the settings page.
pub fn view(theme: &Theme, settings: &Settings) -> Column<Message> {
    column()
        .spacing(16.0)
        .push(text("Settings").size(20.0).color(theme.text))
        .push(
            panel(
                column()
                    .spacing(12.0)
                    .push(toggle_row(
                        theme,
                        "Email alerts",
                        settings.email_alerts,
                        Message::ToggleAlerts,
                    ))
                    .push(toggle_row(
                        theme,
                        "Auto refresh",
                        settings.auto_refresh,
                        Message::ToggleAutoRefresh,
                    ))
                    .push(
                        row()
                            .spacing(12.0)
                            .push(text("Refresh interval").size(14.0).color(theme.text))
                            .push(
                                text(format!("{}s", settings.refresh_interval_secs))
                                    .size(14.0)
                                    .color(theme.accent),
                            )
                            .push(
                                button("Change")
                                    .on_press(|_| Message::CycleRefreshInterval),
                            ),
                    ),
            )
            .background(theme.surface)
            .border(theme.border, 1.0)
            .padding(Padding::uniform(16.0)),
        )
}
