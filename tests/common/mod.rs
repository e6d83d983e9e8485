//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use embedscope_engine::{App, AppSettings, Architecture, STEP_INTERVAL};
use embedscope_tui::ScreenLayout;

/// Terminal size the layout is computed for.
pub const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

pub fn layout() -> ScreenLayout {
    ScreenLayout::compute(SCREEN)
}

pub fn app_on(architecture: Architecture) -> App {
    App::new(AppSettings {
        architecture,
        ..AppSettings::default()
    })
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Left click in the middle of `area`.
pub fn click_on(area: Rect) -> Event {
    click(area.x + area.width / 2, area.y + area.height / 2)
}

/// Let `intervals` playback periods elapse on the paused clock, then apply
/// the due ticks the way the frame loop does.
pub async fn run_intervals(app: &mut App, intervals: u32) {
    tokio::time::sleep(STEP_INTERVAL * intervals + Duration::from_millis(1)).await;
    app.tick();
}
