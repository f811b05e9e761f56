mod context;
mod mask;
mod mode;
mod sync;

pub use context::*;
pub use mask::*;
pub use mode::*;
