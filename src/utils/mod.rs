pub mod error;

pub use error::{NexusError, Result};
