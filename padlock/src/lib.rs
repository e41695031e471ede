mod config;
mod dictionary;
mod error;
mod loader;
mod matcher;
mod report;
mod wheel;

pub use config::*;
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use loader::{load_lock, read_lock};
pub use matcher::alignments;
pub use report::{run, Report};
pub use wheel::{letter_index, Lock, Wheel};
