//! Terminal user interface for Mission Console.
//!
//! Follows the usual split: [`app`] owns state and the event loop,
//! [`event`] turns terminal input and timer ticks into state mutations,
//! [`ui`] renders the current state, and [`views`] holds one renderer
//! per screen.

/// Application state and main event loop.
pub mod app;

/// Event handling: input stream, tick timer, key dispatch.
pub mod event;

/// Shared test helpers (TestBackend terminals, buffer inspection).
pub mod test_utils;

/// Top-level rendering orchestration.
pub mod ui;

/// Per-screen renderers.
pub mod views;
