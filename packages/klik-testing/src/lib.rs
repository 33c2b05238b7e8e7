pub mod harness;
pub mod host;

pub use harness::{Harness, HarnessError, QueryError};
pub use host::RecordingHost;
