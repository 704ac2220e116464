//! Error handling for the a5cipher ecosystem

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Processing {
            context: "I/O operation",
            message: e.to_string(),
        }
    }
}
