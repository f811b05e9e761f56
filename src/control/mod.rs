mod feature;
mod interrupt;
mod scan_mode;

pub use feature::*;
pub use interrupt::*;
pub use scan_mode::*;
