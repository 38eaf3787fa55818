//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the rackview crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use rackview::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let snapshot = Snapshot::from_json(&std::fs::read_to_string("path/to/state.json")?)?;
//! let states = fold_line(snapshot.line("fan_on").unwrap());
//! println!("fan_on is {}", if states.active { "live" } else { "disabled" });
//! # Ok(())
//! # }
//! ```

// Data model
pub use crate::model::{
    Branch, BranchSlot, Element, InputKind, Line, Payload, Snapshot, Step, StepPath,
};

// Active-path fold
pub use crate::engine::{ElementState, LineStates, fold_elements, fold_line};

// Rendering
pub use crate::render::{
    BlockRenderer, BlockView, Connector, ConnectorShape, LineLayout, LineRenderer, Padding,
    PreviewItem, RackFrame, RackView, RenderedElement, RenderedLine, TextCanvas,
};

// Interaction
pub use crate::interaction::{CloseReason, DetailView, InteractionBridge};

// Polling and configuration
pub use crate::config::ViewerConfig;
pub use crate::poll::{Poller, SnapshotSlot, SnapshotSource};

// Error types
pub use crate::error::{ConfigError, PollError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
