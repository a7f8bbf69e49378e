//! Per-screen renderers.
//!
//! One module per [`crate::ViewId`]. Each exposes a single
//! `render(frame, area, app)` entry point and mutates nothing.

/// Agent roster and mission queue.
pub mod agents;

/// Secure comms channel.
pub mod comms;

/// Command dashboard with the reorderable section grid.
pub mod dashboard;

/// Content strategy calendar.
pub mod growth;

/// Console settings.
pub mod settings;

/// Mission protocol board.
pub mod tasks;

/// File vault with preview.
pub mod vault;
