//! Overview page: fleet metric cards.

use opsdeck_ui::prelude::*;
use opsdeck_ui::{Column, Padding, Panel};

use crate::message::Message;
use crate::mock::FleetMetrics;
use crate::theme::Theme;

fn metric_card(theme: &Theme, label: &str, value: String) -> Panel<Message> {
    panel(
        column()
            .spacing(4.0)
            .push(text(label).size(12.0).color(theme.text_dim))
            .push(text(value).size(24.0).color(theme.text)),
    )
    .background(theme.surface)
    .border(theme.border, 1.0)
    .padding(Padding::uniform(16.0))
}

/// Build the overview page.
pub fn view(theme: &Theme, metrics: &FleetMetrics) -> Column<Message> {
    column()
        .spacing(16.0)
        .push(text("Fleet overview").size(20.0).color(theme.text))
        .push(
            row()
                .spacing(16.0)
                .push(metric_card(
                    theme,
                    "Active accounts",
                    metrics.active_accounts.to_string(),
                ))
                .push(metric_card(
                    theme,
                    "Open incidents",
                    metrics.open_incidents.to_string(),
                ))
                .push(metric_card(
                    theme,
                    "Uptime (30d)",
                    format!("{:.2}%", metrics.uptime_pct),
                ))
                .push(metric_card(
                    theme,
                    "Events today",
                    metrics.events_today.to_string(),
                )),
        )
        .push(
            button("Provision account")
                .on_press(|_| Message::WizardOpened),
        )
}
