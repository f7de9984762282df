//! The dashboard application: Elm-style update/view over the widget toolkit.

use opsdeck_ui::prelude::*;
use opsdeck_ui::Padding;

use crate::constants::{NAV_BAR_HEIGHT, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::AppError;
use crate::message::Message;
use crate::mock;
use crate::state::{DashboardState, Page, WizardStep};
use crate::theme::Theme;
use crate::views;
use crate::widget_state::WidgetStates;

const CONTENT_PADDING: f32 = 16.0;

pub struct DashboardApp {
    pub theme: Theme,
    pub state: DashboardState,
    pub widgets: WidgetStates,
}

impl DashboardApp {
    /// Build the app from the bundled data set.
    pub fn new() -> Result<Self, AppError> {
        let data = mock::load()?;
        Ok(Self {
            theme: Theme::default(),
            state: DashboardState::new(data.metrics, data.accounts),
            widgets: WidgetStates::new(),
        })
    }

    pub fn window_bounds() -> Bounds {
        Bounds::new(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    /// Centered bounds of the wizard modal.
    fn wizard_bounds() -> Bounds {
        let (width, height) = (480.0, 280.0);
        Bounds::new(
            (WINDOW_WIDTH - width) / 2.0,
            (WINDOW_HEIGHT - height) / 2.0,
            width,
            height,
        )
    }

    /// Viewport height granted to page content below the nav bar.
    fn content_height() -> f32 {
        WINDOW_HEIGHT - NAV_BAR_HEIGHT - 4.0 * CONTENT_PADDING - 40.0
    }

    // --- update ------------------------------------------------------------

    pub fn update(&mut self, message: Message) {
        log::debug!("update: {message:?}");
        match message {
            Message::PageSelected(page) => self.state.page = page,

            Message::AccountsScrolled(offset) => {
                log::trace!("accounts list scrolled to {offset:.1}");
            }
            Message::AccountSelected(id) => {
                self.state.selected_account = Some(id);
                if let Some(account) = self.state.selected() {
                    log::info!("selected account {}", account.name);
                }
            }
            Message::AddAccount => self.push_synthetic_account(),

            Message::ToggleAlerts => {
                self.state.settings.email_alerts = !self.state.settings.email_alerts;
            }
            Message::ToggleAutoRefresh => {
                self.state.settings.auto_refresh = !self.state.settings.auto_refresh;
            }
            Message::CycleRefreshInterval => self.state.settings.cycle_refresh_interval(),

            Message::WizardOpened => self.state.wizard = Some(WizardStep::Plan),
            Message::WizardNext => {
                if let Some(step) = self.state.wizard {
                    self.state.wizard = step.next().or(Some(step));
                }
            }
            Message::WizardBack => {
                if let Some(step) = self.state.wizard {
                    self.state.wizard = step.back().or(Some(step));
                }
            }
            Message::WizardCancelled => self.state.wizard = None,
            Message::WizardFinished => {
                self.push_synthetic_account();
                self.state.wizard = None;
            }
        }
    }

    fn push_synthetic_account(&mut self) {
        let id = self.state.next_account_id;
        self.state.next_account_id += 1;
        self.state.accounts.push(mock::synthetic_account(id));
        self.state.metrics.active_accounts += 1;
        log::info!("provisioned account {id}");
    }

    // --- view --------------------------------------------------------------

    /// Build the main element tree (everything except the wizard modal).
    pub fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.state.page {
            Page::Overview => scroll_region(
                &self.widgets.overview_scroll,
                views::overview::view(&self.theme, &self.state.metrics),
            )
            .height(Self::content_height())
            .into(),
            Page::Accounts => views::accounts::view(
                &self.theme,
                &self.widgets.accounts_scroll,
                &self.state.accounts,
                self.state.selected_account,
                Self::content_height(),
            )
            .into(),
            Page::Settings => views::settings::view(&self.theme, &self.state.settings).into(),
        };

        container(
            column()
                .spacing(CONTENT_PADDING)
                .push(views::nav_bar(&self.theme, self.state.page))
                .push(page),
        )
        .padding(Padding::uniform(CONTENT_PADDING))
        .background(self.theme.background)
        .into()
    }

    fn view_wizard(&self) -> Option<Element<Message>> {
        self.state
            .wizard
            .map(|step| views::wizard::view(&self.theme, step).into())
    }

    // --- frame loop --------------------------------------------------------

    /// Record one frame into the renderer.
    pub fn render(&self, renderer: &mut Renderer) {
        renderer.begin_frame();
        let bounds = Self::window_bounds();
        self.view().draw(renderer, bounds);
        if let Some(wizard) = self.view_wizard() {
            // Dim everything beneath the modal.
            renderer.fill_rect(bounds, Color::BLACK.with_alpha(0.5));
            wizard.draw(renderer, Self::wizard_bounds());
        }
    }

    /// Route one input event, applying any resulting message.
    ///
    /// While the wizard is open it owns all input.
    pub fn handle_event(&mut self, event: &Event) {
        let message = match self.view_wizard() {
            Some(mut wizard) => wizard.on_event(event, Self::wizard_bounds()),
            None => self.view().on_event(event, Self::window_bounds()),
        };
        if let Some(message) = message {
            self.update(message);
        }
    }

    /// Advance animations. Returns true while another frame is needed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.widgets.tick(dt)
    }
}
