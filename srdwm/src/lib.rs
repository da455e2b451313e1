//! Configuration layer of the srdwm window manager.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
pub mod config;
pub mod utils;

pub use config::{BaseCommand, Config, Keybind, Settings};
