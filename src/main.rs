//! opsdeck - an operations dashboard, driven headless.
//!
//! Runs a scripted session against the dashboard: page navigation, mouse
//! wheel scrolling, a scrollbar thumb drag, a track-click page jump and a
//! live content mutation, then writes the final frame to a PNG.

mod app;
mod constants;
mod error;
mod message;
mod mock;
mod snapshot;
mod state;
mod theme;
mod views;
mod widget_state;

use opsdeck_ui::{Event, MouseButton, Point, Renderer};
use web_time::Instant;

use crate::app::DashboardApp;
use crate::constants::{FRAME_INTERVAL, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::AppError;
use crate::message::Message;
use crate::state::Page;

const SNAPSHOT_PATH: &str = "opsdeck_snapshot.png";

fn left_press(x: f32, y: f32) -> Event {
    Event::MousePressed {
        button: MouseButton::Left,
        position: Point::new(x, y),
    }
}

fn left_release(x: f32, y: f32) -> Event {
    Event::MouseReleased {
        button: MouseButton::Left,
        position: Point::new(x, y),
    }
}

fn run_script(app: &mut DashboardApp, renderer: &mut Renderer) {
    // Start on the accounts page; one frame teaches the scroll state its
    // extents and track geometry.
    app.update(Message::PageSelected(Page::Accounts));
    app.render(renderer);

    let scroll = &app.widgets.accounts_scroll;
    log::info!(
        "accounts list: content {:.0}px in a {:.0}px viewport",
        scroll.metrics().content_extent,
        scroll.metrics().visible_extent
    );

    // Mouse wheel.
    app.handle_event(&Event::MouseWheel {
        delta: 240.0,
        position: Point::new(600.0, 400.0),
    });
    log::info!(
        "after wheel: offset {:.1}, scrollbar at {}%",
        app.widgets.accounts_scroll.scroll_offset(),
        app.widgets.accounts_scroll.accessibility().value_now
    );

    // Drag the thumb 120px down, with the pointer wandering off the track
    // mid-gesture.
    let track = app.widgets.accounts_scroll.track();
    let thumb = app.widgets.accounts_scroll.thumb();
    let thumb_center_y = track.origin_offset + thumb.top + thumb.height / 2.0;
    let track_x = WINDOW_WIDTH - 16.0 - 12.0;
    app.handle_event(&left_press(track_x, thumb_center_y));
    app.handle_event(&Event::MouseMoved {
        position: Point::new(track_x, thumb_center_y + 60.0),
    });
    app.handle_event(&Event::MouseMoved {
        position: Point::new(40.0, thumb_center_y + 120.0),
    });
    app.handle_event(&left_release(40.0, thumb_center_y + 120.0));
    log::info!(
        "after drag: offset {:.1}, scrollbar at {}%",
        app.widgets.accounts_scroll.scroll_offset(),
        app.widgets.accounts_scroll.accessibility().value_now
    );

    // Track click above the thumb pages back, animated.
    let thumb = app.widgets.accounts_scroll.thumb();
    let above_y = track.origin_offset + (thumb.top - 20.0).max(0.0);
    app.handle_event(&left_press(track_x, above_y));
    app.handle_event(&left_release(track_x, above_y));
    let mut frames = 0u32;
    while app.tick(FRAME_INTERVAL) {
        frames += 1;
    }
    log::info!(
        "page jump settled after {frames} frames at offset {:.1}",
        app.widgets.accounts_scroll.scroll_offset()
    );

    // Live content mutation: the list grows, the thumb shrinks. The debug
    // tap on the change stream is silenced first.
    app.widgets.silence_change_log();
    let thumb_before = app.widgets.accounts_scroll.thumb().height;
    for _ in 0..8 {
        app.update(Message::AddAccount);
    }
    app.render(renderer);
    log::info!(
        "after growth: thumb height {:.1} -> {:.1}",
        thumb_before,
        app.widgets.accounts_scroll.thumb().height
    );
}

fn run() -> Result<(), AppError> {
    let started = Instant::now();
    let mut app = DashboardApp::new()?;
    let mut renderer = Renderer::new();

    run_script(&mut app, &mut renderer);

    let commands = renderer.take_commands();
    snapshot::save_png(
        SNAPSHOT_PATH,
        &commands,
        WINDOW_WIDTH as u32,
        WINDOW_HEIGHT as u32,
    )?;
    log::info!("session finished in {:.1?}", started.elapsed());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
