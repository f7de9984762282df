//! Page views.
//!
//! Each view is a pure function from application state to an element tree.

pub mod accounts;
pub mod overview;
pub mod settings;
pub mod wizard;

use opsdeck_ui::prelude::*;
use opsdeck_ui::Row;

use crate::message::Message;
use crate::state::Page;
use crate::theme::Theme;

/// The top navigation bar with one button per page.
pub fn nav_bar(theme: &Theme, active: Page) -> Row<Message> {
    let mut bar = row().spacing(8.0);
    for page in Page::ALL {
        let mut config = opsdeck_ui::ButtonConfig::default()
            .background(theme.surface_raised)
            .text_color(theme.text_dim);
        if page == active {
            config = config.background(theme.accent).text_color(theme.text);
        }
        bar = bar.push(
            button(page.title())
                .config(config)
                .on_press(move |_| Message::PageSelected(page)),
        );
    }
    bar
}
