pub mod settings;

pub use settings::{Control, Gateway, Logger, Logging, Settings};
