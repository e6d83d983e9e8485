//! Integration test modules

mod interaction;
mod playback;
mod settings;
