//! Render model for racks of lines.
//!
//! Rendering is a pure function of a snapshot: [`RackView`] walks the lines,
//! [`LineRenderer`] threads the active-path fold through each line and
//! [`BlockRenderer`] turns every step into a box with a bounded preview.
//! [`TextCanvas`] draws the result for terminals.

pub mod block;
pub mod line;
pub mod preview;
pub mod rack;
pub mod text;

pub use block::{BlockRenderer, BlockView, ExternalDecoration, Padding};
pub use line::{
    BranchArm, Connector, ConnectorShape, LineLayout, LineRenderer, RenderedElement, RenderedLine,
};
pub use preview::{EntryKind, PreviewEntry, PreviewFormatter, PreviewItem};
pub use rack::{RackFrame, RackView};
pub use text::TextCanvas;
