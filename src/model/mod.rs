pub mod line;
pub mod payload;
pub mod snapshot;
pub mod step;

pub use line::*;
pub use payload::*;
pub use snapshot::*;
pub use step::*;
