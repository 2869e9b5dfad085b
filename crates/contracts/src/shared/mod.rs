pub mod error;

pub use error::{SubmissionError, SubmissionResult};
