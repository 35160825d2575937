use crate::config::Config;
use crate::error::{Error, Result};
use crate::executor::WorkerPool;
use parking_lot::RwLock;
use std::sync::Arc;

/// A configured worker pool plus the config it was built from.
///
/// Most callers construct [`WorkerPool`] directly; the runtime exists for the
/// global convenience API ([`init`] / [`spawn`] / [`shutdown`]).
pub struct Runtime {
    pub(crate) pool: WorkerPool,
    config: Config,
}

impl Runtime {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let pool = WorkerPool::new(&config)?;

        Ok(Self { pool, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Global runtime for simple API
static GLOBAL_RUNTIME: RwLock<Option<Arc<Runtime>>> = RwLock::new(None);

pub fn init() -> Result<()> {
    init_with_config(Config::default())
}

pub fn init_with_config(config: Config) -> Result<()> {
    let mut runtime = GLOBAL_RUNTIME.write();

    if runtime.is_some() {
        return Err(Error::AlreadyInitialized);
    }

    let rt = Runtime::new(config)?;
    *runtime = Some(Arc::new(rt));

    Ok(())
}

pub(crate) fn current_runtime() -> Result<Arc<Runtime>> {
    GLOBAL_RUNTIME
        .read()
        .as_ref()
        .cloned()
        .ok_or(Error::NotInitialized)
}

/// Submit a closure to the global pool.
pub fn spawn<F>(f: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    current_runtime()?.pool.execute(f)
}

/// Tear down the global runtime, joining all workers gracefully.
pub fn shutdown() {
    let mut runtime = GLOBAL_RUNTIME.write();
    *runtime = None;
}
