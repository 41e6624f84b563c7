//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to simulation input)
//! - Presentation (DOM on web, log lines natively)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod headless;
pub mod input;

pub use headless::{LogSink, run_headless};
pub use input::{KeyAction, key_action};
