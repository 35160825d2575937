pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::executor::{Task, TaskId, WorkerPool};
pub use crate::{init, init_with_config, shutdown, spawn};
