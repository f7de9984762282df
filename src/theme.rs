//! Dashboard color theme.

use opsdeck_ui::Color;

/// Colors shared by every view.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub warning: Color,
    pub danger: Color,
    pub ok: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0.07, 0.08, 0.1),
            surface: Color::rgb(0.11, 0.12, 0.15),
            surface_raised: Color::rgb(0.15, 0.16, 0.2),
            border: Color::rgb(0.25, 0.27, 0.32),
            text: Color::rgb(0.92, 0.93, 0.95),
            text_dim: Color::rgb(0.6, 0.62, 0.68),
            accent: Color::rgb(0.35, 0.55, 0.95),
            warning: Color::rgb(0.95, 0.75, 0.25),
            danger: Color::rgb(0.9, 0.35, 0.35),
            ok: Color::rgb(0.35, 0.8, 0.5),
        }
    }
}

impl Theme {
    /// Status color for an account health value.
    pub fn status_color(&self, status: crate::mock::AccountStatus) -> Color {
        use crate::mock::AccountStatus;
        match status {
            AccountStatus::Healthy => self.ok,
            AccountStatus::Degraded => self.warning,
            AccountStatus::Critical => self.danger,
        }
    }
}
