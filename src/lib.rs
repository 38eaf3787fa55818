//! # Rackview - Active-Path Rendering for Logic Line Racks
//!
//! **Rackview** turns snapshots of a logic-line monitor into a render model. A
//! snapshot holds a "rack" of independent lines; every line is a sequence of
//! monitored steps, some of them split into two-way branches, each annotated
//! with a pass/fail outcome and an arbitrary JSON input.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Snapshot**: Parse the monitor's JSON with `Snapshot::from_json`, or
//!     keep one fresh with a `Poller` publishing into a `SnapshotSlot`.
//! 2.  **Render**: `RackView::render` folds every line's active path and produces
//!     boxes, bounded previews and live/disabled connectors.
//! 3.  **Draw**: Walk the `RackFrame` in your own front end, or draw it as text with
//!     `TextCanvas`.
//! 4.  **Interact**: Route block clicks into an `InteractionBridge` to get a
//!     `DetailView` with the full, indented input.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rackview::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("snapshot.json")?;
//!     let snapshot = Snapshot::from_json(&json)?;
//!
//!     let frame = RackView::render(Some(&snapshot));
//!     println!("{}", TextCanvas::default().draw(&frame));
//!
//!     // Open the first block of the first line.
//!     let mut bridge = InteractionBridge::new();
//!     if let Some((_, block)) = frame.lines().first().and_then(|l| l.blocks().into_iter().next()) {
//!         block.click(|step| bridge.select(step));
//!     }
//!     if let Some(detail) = bridge.detail() {
//!         println!("{}", detail.text());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod model;
pub mod poll;
pub mod prelude;
pub mod render;
