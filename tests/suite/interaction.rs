//! Keyboard and mouse events routed through `apply_event`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use embedscope_engine::{Architecture, Step};
use embedscope_tui::{ClickTarget, apply_event};

use crate::common::{app_on, click, click_on, key, layout, run_intervals};

#[test]
fn clicking_every_tab_selects_it_and_resets_step() {
    let layout = layout();
    let mut app = app_on(Architecture::SkipGram);
    for architecture in Architecture::all() {
        apply_event(&mut app, key(KeyCode::Char('n')), &layout);
        assert_ne!(app.step(), Step::FIRST);

        apply_event(&mut app, click_on(layout.tab_area(*architecture)), &layout);
        assert_eq!(app.architecture(), *architecture);
        assert_eq!(app.step(), Step::FIRST);
    }
}

#[test]
fn clicking_the_selected_tab_still_resets_step() {
    let layout = layout();
    let mut app = app_on(Architecture::Cbow);
    apply_event(&mut app, click_on(layout.step_button), &layout);
    apply_event(&mut app, click_on(layout.step_button), &layout);
    assert_eq!(app.step().value(), 2);

    apply_event(&mut app, click_on(layout.tab_area(Architecture::Cbow)), &layout);
    assert_eq!(app.architecture(), Architecture::Cbow);
    assert_eq!(app.step(), Step::FIRST);
}

#[test]
fn hit_test_agrees_with_click_handling() {
    let layout = layout();
    assert_eq!(
        layout.hit_test(layout.play_button.x, layout.play_button.y),
        Some(ClickTarget::PlayPause)
    );
    let mut app = app_on(Architecture::SkipGram);
    // Title row is not interactive.
    apply_event(&mut app, click(layout.title.x + 1, layout.title.y), &layout);
    assert_eq!(app.step(), Step::FIRST);
    assert!(!app.is_playing());
}

#[test]
fn quick_pick_and_arrow_keys_navigate_tabs() {
    let layout = layout();
    let mut app = app_on(Architecture::SkipGram);

    apply_event(&mut app, key(KeyCode::Char('4')), &layout);
    assert_eq!(app.architecture(), Architecture::Elmo);
    apply_event(&mut app, key(KeyCode::Right), &layout);
    assert_eq!(app.architecture(), Architecture::SkipGram);
    apply_event(&mut app, key(KeyCode::Char('h')), &layout);
    assert_eq!(app.architecture(), Architecture::Elmo);
    apply_event(&mut app, key(KeyCode::Char('0')), &layout);
    assert_eq!(app.architecture(), Architecture::Elmo);
}

#[test]
fn modified_keys_other_than_ctrl_c_are_ignored() {
    let layout = layout();
    let mut app = app_on(Architecture::SkipGram);
    let ctrl_n = Event::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert!(!apply_event(&mut app, ctrl_n, &layout));
    assert_eq!(app.step(), Step::FIRST);
    assert!(!app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn space_plays_and_pauses() {
    let layout = layout();
    let mut app = app_on(Architecture::FastText);

    apply_event(&mut app, key(KeyCode::Char(' ')), &layout);
    assert!(app.is_playing());
    run_intervals(&mut app, 2).await;
    assert_eq!(app.step().value(), 2);

    apply_event(&mut app, key(KeyCode::Char('p')), &layout);
    assert!(!app.is_playing());
    run_intervals(&mut app, 1).await;
    assert_eq!(app.step().value(), 2);

    apply_event(&mut app, key(KeyCode::Enter), &layout);
    assert_eq!(app.step().value(), 3);
}

#[tokio::test(start_paused = true)]
async fn clicking_play_then_pause_button() {
    let layout = layout();
    let mut app = app_on(Architecture::SkipGram);

    apply_event(&mut app, click_on(layout.play_button), &layout);
    assert!(app.is_playing());
    run_intervals(&mut app, 1).await;
    assert_eq!(app.step().value(), 1);

    apply_event(&mut app, click_on(layout.play_button), &layout);
    assert!(!app.is_playing());
}
