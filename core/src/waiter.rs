use awaiter_types::{WaitConfig, WaitOutcome};

use crate::{blocking, poll};

/// A reusable handle carrying one [`WaitConfig`].
///
/// Every call starts its own timer and start instant; nothing is shared
/// between waits made through the same handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueWaiter {
    config: WaitConfig,
}

impl ValueWaiter {
    #[must_use]
    pub const fn new(config: WaitConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> WaitConfig {
        self.config
    }

    pub async fn poll_until<T, E, F>(&self, accessor: F) -> Result<WaitOutcome<T>, E>
    where
        F: FnMut() -> Result<Option<T>, E>,
    {
        poll::poll_until(accessor, self.config).await
    }

    pub async fn wait_for_value<T, E, F>(&self, accessor: F) -> Result<bool, E>
    where
        F: FnMut() -> Result<Option<T>, E>,
    {
        poll::wait_for_value(accessor, self.config).await
    }

    pub async fn wait_for<T, F>(&self, accessor: F) -> bool
    where
        F: FnMut() -> Option<T>,
    {
        poll::wait_for(accessor, self.config).await
    }

    pub async fn wait_for_some<T, F>(&self, accessor: F) -> Option<T>
    where
        F: FnMut() -> Option<T>,
    {
        poll::wait_for_some(accessor, self.config).await
    }

    /// Same as [`Self::wait_for_value`], blocking the calling thread.
    pub fn wait_for_value_blocking<T, E, F>(&self, accessor: F) -> Result<bool, E>
    where
        F: FnMut() -> Result<Option<T>, E>,
    {
        blocking::wait_for_value(accessor, self.config)
    }
}

impl From<WaitConfig> for ValueWaiter {
    fn from(config: WaitConfig) -> Self {
        Self::new(config)
    }
}
