//! Account provisioning wizard, shown as a modal panel.

use opsdeck_ui::prelude::*;
use opsdeck_ui::{Column, Padding, Panel};

use crate::message::Message;
use crate::state::WizardStep;
use crate::theme::Theme;

fn step_body(theme: &Theme, step: WizardStep) -> Column<Message> {
    let body = match step {
        WizardStep::Plan => "Starter, growth or enterprise. Billing begins after provisioning.",
        WizardStep::Region => "Pick the region closest to the tenant's traffic.",
        WizardStep::Confirm => "Review the choices above, then provision the account.",
    };
    column()
        .spacing(8.0)
        .push(text(step.title()).size(18.0).color(theme.text))
        .push(text(body).size(13.0).color(theme.text_dim))
}

fn step_controls(step: WizardStep) -> Column<Message> {
    let mut controls = row().spacing(8.0);
    if step.back().is_some() {
        controls = controls.push(button("Back").on_press(|_| Message::WizardBack));
    }
    controls = match step.next() {
        Some(_) => controls.push(button("Next").on_press(|_| Message::WizardNext)),
        None => controls.push(button("Provision").on_press(|_| Message::WizardFinished)),
    };
    controls = controls.push(button("Cancel").on_press(|_| Message::WizardCancelled));
    column().push(controls)
}

/// Build the wizard modal for the current step.
pub fn view(theme: &Theme, step: WizardStep) -> Panel<Message> {
    let steps = [WizardStep::Plan, WizardStep::Region, WizardStep::Confirm];
    let position = steps.iter().position(|s| *s == step).unwrap_or(0) + 1;

    panel(
        column()
            .spacing(16.0)
            .push(
                text(format!("Provision account: step {position} of {}", steps.len()))
                    .size(12.0)
                    .color(theme.text_dim),
            )
            .push(step_body(theme, step))
            .push(step_controls(step)),
    )
    .background(theme.surface_raised)
    .border(theme.accent, 2.0)
    .padding(Padding::uniform(24.0))
}
