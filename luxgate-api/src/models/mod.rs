mod reading;
mod status;
mod threshold;

pub use reading::*;
pub use status::*;
pub use threshold::*;
