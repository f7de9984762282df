//! Accounts page: the scrollable account list.

use opsdeck_ui::prelude::*;
use opsdeck_ui::{Column, Padding, ScrollRegion};

use crate::message::Message;
use crate::mock::Account;
use crate::theme::Theme;

fn account_row(theme: &Theme, account: &Account, selected: bool) -> Element<Message> {
    let id = account.id;
    let background = if selected {
        theme.surface_raised
    } else {
        theme.surface
    };
    let header = row()
        .spacing(12.0)
        .push(text(account.name.as_str()).size(14.0).color(theme.text))
        .push(
            text(account.status.label())
                .size(12.0)
                .color(theme.status_color(account.status)),
        );
    let detail = text(format!(
        "{} · {} · ${:.2}/mo",
        account.plan, account.region, account.monthly_spend
    ))
    .size(12.0)
    .color(theme.text_dim);

    panel(
        column()
            .spacing(4.0)
            .push(header)
            .push(detail)
            .push(
                button("Select")
                    .on_press(move |_| Message::AccountSelected(id)),
            ),
    )
    .background(background)
    .border(theme.border, 1.0)
    .padding(Padding::uniform(8.0))
    .into()
}

/// Build the accounts page around the shared scroll state.
///
/// `list_height` is the viewport height granted to the scrollable list.
pub fn view(
    theme: &Theme,
    scroll: &ScrollRegionState,
    accounts: &[Account],
    selected: Option<u64>,
    list_height: f32,
) -> Column<Message> {
    let mut list = column().spacing(8.0);
    for account in accounts {
        list = list.push(account_row(theme, account, selected == Some(account.id)));
    }

    let region: ScrollRegion<Message> = scroll_region(scroll, list)
        .on_scroll(Message::AccountsScrolled)
        .height(list_height);

    column()
        .spacing(12.0)
        .push(
            row()
                .spacing(12.0)
                .push(text(format!("Accounts ({})", accounts.len())).size(20.0).color(theme.text))
                .push(button("Add synthetic").on_press(|_| Message::AddAccount)),
        )
        .push(region)
}
