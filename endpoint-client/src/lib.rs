pub mod config;
pub mod error;
pub mod liveness;
pub mod textify;

pub use config::ProcessConfig;
pub use error::{BoxError, ClientError, ErrorKind, Result};
pub use liveness::{last_seen, online_icon, online_status, Liveness};
pub use textify::{format_address, ClientSummary};
