//! Application state for Embedscope.
//!
//! [`App`] ties together the [`ModelSelector`], the [`AnimationController`]
//! and the playback [`IntervalTimer`]. The CLI frame loop drives it: drain
//! input, call [`App::tick`], draw. All mutation happens on that loop.

mod config;
mod controller;
mod selector;
mod timer;
mod transition;


use std::time::{Duration, Instant};

use tracing::{debug, info};

pub use config::{
    AppConfig, ConfigError, EmbedscopeConfig, MODEL_ENV_VAR, architecture_from_env, config_path,
};
pub use controller::AnimationController;
pub use embedscope_types::ui::UiOptions;
pub use embedscope_types::{Architecture, Diagram, Step, render};
pub use selector::ModelSelector;
pub use timer::IntervalTimer;
pub use transition::HighlightTransition;

/// Playback cadence.
pub const STEP_INTERVAL: Duration = Duration::from_millis(2000);

/// Duration of the highlight fade after a step change.
pub const HIGHLIGHT_FADE: Duration = Duration::from_millis(500);

/// Startup settings resolved from config and environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub architecture: Architecture,
    pub autoplay: bool,
    pub ui_options: UiOptions,
}

impl AppSettings {
    /// Config wins over `EMBEDSCOPE_MODEL`; both fall back to Skip-gram.
    #[must_use]
    pub fn resolve(config: Option<&EmbedscopeConfig>) -> Self {
        let architecture = config
            .and_then(EmbedscopeConfig::initial_architecture)
            .or_else(architecture_from_env)
            .unwrap_or_default();
        Self {
            architecture,
            autoplay: config.is_some_and(EmbedscopeConfig::autoplay),
            ui_options: config.map(EmbedscopeConfig::ui_options).unwrap_or_default(),
        }
    }
}

pub struct App {
    selector: ModelSelector,
    controller: AnimationController,
    /// Present exactly while playing.
    timer: Option<IntervalTimer>,
    transition: Option<HighlightTransition>,
    ui_options: UiOptions,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    /// Build the app. With `autoplay`, playback starts immediately, which
    /// requires a tokio runtime.
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        let mut app = Self {
            selector: ModelSelector::new(settings.architecture),
            controller: AnimationController::new(),
            timer: None,
            transition: None,
            ui_options: settings.ui_options,
            last_frame: Instant::now(),
            should_quit: false,
        };
        info!(architecture = %settings.architecture, autoplay = settings.autoplay, "App initialized");
        if settings.autoplay {
            app.toggle_play();
        }
        app
    }

    #[must_use]
    pub fn architecture(&self) -> Architecture {
        self.selector.selected()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.controller.step()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    /// Banner text for the current step.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.architecture().description(self.step())
    }

    #[must_use]
    pub fn diagram(&self) -> Diagram {
        render(self.architecture(), self.step())
    }

    /// The diagram being faded out, while a highlight transition runs.
    #[must_use]
    pub fn previous_diagram(&self) -> Option<Diagram> {
        self.transition
            .as_ref()
            .map(|transition| render(self.architecture(), transition.from()))
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Start or stop playback. Stopping drops the timer, cancelling its task.
    pub fn toggle_play(&mut self) {
        if self.controller.toggle_play() {
            self.timer = Some(IntervalTimer::start(STEP_INTERVAL));
            debug!(step = self.step().value(), "Playback started");
        } else {
            self.timer = None;
            debug!(step = self.step().value(), "Playback paused");
        }
    }

    /// Manual advance; ignored while playing.
    pub fn next_step(&mut self) {
        let from = self.step();
        if self.controller.next_step() {
            debug!(step = self.step().value(), "Manual step");
            self.begin_transition(from);
        }
    }

    /// Switch tabs. Always resets to the first step; playback is untouched.
    pub fn select_architecture(&mut self, architecture: Architecture) {
        self.selector.select(architecture);
        self.after_selection();
    }

    pub fn select_next_architecture(&mut self) {
        self.selector.select_next();
        self.after_selection();
    }

    pub fn select_prev_architecture(&mut self) {
        self.selector.select_prev();
        self.after_selection();
    }

    /// Quick pick by 0-based tab index. Returns false for out-of-range indices.
    pub fn select_architecture_index(&mut self, index: usize) -> bool {
        if !self.selector.select_index(index) {
            return false;
        }
        self.after_selection();
        true
    }

    fn after_selection(&mut self) {
        self.controller.reset();
        self.transition = None;
        debug!(architecture = %self.architecture(), "Architecture selected");
    }

    fn begin_transition(&mut self, from: Step) {
        if self.ui_options.reduced_motion || from == self.step() {
            self.transition = None;
            return;
        }
        self.transition = Some(HighlightTransition::new(from, HIGHLIGHT_FADE));
    }

    /// Apply timer ticks that came due since the last frame.
    pub fn tick(&mut self) {
        let due = self.timer.as_mut().map_or(0, IntervalTimer::take_due);
        if due == 0 {
            return;
        }
        let from = self.step();
        for _ in 0..due {
            self.controller.on_tick();
        }
        debug!(due, step = self.step().value(), "Timer tick");
        self.begin_transition(from);
    }

    /// Time since the previous call, for advancing the highlight transition.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    pub fn transition_mut(&mut self) -> Option<&mut HighlightTransition> {
        self.transition.as_mut()
    }

    pub fn clear_transition(&mut self) {
        self.transition = None;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop playback before teardown so no timer outlives the UI.
    pub fn shutdown(&mut self) {
        if self.is_playing() {
            self.toggle_play();
        }
    }
}
