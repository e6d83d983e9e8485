//! Playback driven through the public `App` surface on a paused clock.

use std::time::Duration;

use embedscope_engine::{App, AppSettings, Architecture, STEP_INTERVAL, Step};

use crate::common::{app_on, run_intervals};

#[tokio::test(start_paused = true)]
async fn playback_cycles_through_all_steps_and_wraps() {
    let mut app = app_on(Architecture::SkipGram);
    app.toggle_play();

    let mut seen = Vec::new();
    for _ in 0..5 {
        run_intervals(&mut app, 1).await;
        seen.push(app.step().value());
    }
    assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    app.shutdown();
}

#[tokio::test(start_paused = true)]
async fn nothing_happens_before_first_interval() {
    let mut app = app_on(Architecture::Cbow);
    app.toggle_play();

    tokio::time::sleep(STEP_INTERVAL - Duration::from_millis(1)).await;
    app.tick();
    assert_eq!(app.step(), Step::FIRST);
    app.shutdown();
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_step_and_description() {
    let mut app = app_on(Architecture::FastText);
    app.toggle_play();
    run_intervals(&mut app, 2).await;
    assert_eq!(app.step().value(), 2);

    app.toggle_play();
    assert!(!app.is_playing());
    run_intervals(&mut app, 3).await;
    assert_eq!(app.step().value(), 2);
    assert_eq!(app.description(), "N-gram embeddings are averaged");
}

#[tokio::test(start_paused = true)]
async fn manual_step_ignored_while_playing() {
    let mut app = app_on(Architecture::Elmo);
    app.toggle_play();
    app.next_step();
    app.next_step();
    assert_eq!(app.step(), Step::FIRST);

    run_intervals(&mut app, 1).await;
    assert_eq!(app.step().value(), 1);
    app.shutdown();
}

#[tokio::test(start_paused = true)]
async fn switching_model_mid_playback_restarts_from_first_step() {
    let mut app = app_on(Architecture::SkipGram);
    app.toggle_play();
    run_intervals(&mut app, 3).await;
    assert_eq!(app.step(), Step::LAST);

    app.select_architecture(Architecture::Elmo);
    assert_eq!(app.step(), Step::FIRST);
    assert!(app.is_playing());
    assert_eq!(app.description(), "Input sequence of words");

    run_intervals(&mut app, 1).await;
    assert_eq!(app.architecture(), Architecture::Elmo);
    assert_eq!(app.step().value(), 1);
    app.shutdown();
}

#[tokio::test(start_paused = true)]
async fn autoplay_starts_playing_on_launch() {
    let mut app = App::new(AppSettings {
        autoplay: true,
        ..AppSettings::default()
    });
    assert!(app.is_playing());
    run_intervals(&mut app, 1).await;
    assert_eq!(app.step().value(), 1);
    app.shutdown();
    assert!(!app.is_playing());
}

#[test]
fn manual_walkthrough_wraps_to_first_step() {
    let mut app = app_on(Architecture::Cbow);
    let descriptions: Vec<&str> = (0..5)
        .map(|_| {
            let description = app.description();
            app.next_step();
            description
        })
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Multiple context words are input",
            "Context words are averaged in projection layer",
            "Embedding is created from averaged context",
            "Target word is predicted",
            "Multiple context words are input",
        ]
    );
}
