pub mod error;
pub mod record;
pub mod status;

pub use error::{Error, Result};
pub use record::{AgentRecord, NewAgent};
pub use status::ClearanceStatus;
