/*!
 * Empty File Pool
 * Pool that refuses every allocation
 */

use super::traits::{FileHandle, FilePool};
use super::types::{PoolError, PoolResult};

/// File pool without any backing storage
///
/// Used where a worker is configured without scratch storage: any action
/// that attempts to allocate a temporary file fails immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPool;

impl EmptyPool {
    /// Create new empty pool
    pub fn new() -> Self {
        Self
    }
}

impl FilePool for EmptyPool {
    fn new_file(&self) -> PoolResult<Box<dyn FileHandle>> {
        Err(PoolError::Unavailable(
            "worker is not configured with scratch storage".to_string(),
        ))
    }
}
