/*!
 * Metered File Pool
 * Decorator that measures scratch-file usage without changing pool behavior
 */

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::traits::{FileHandle, FilePool};
use super::types::{PoolError, PoolResult};

/// Aggregated scratch-file usage of one action execution
///
/// All fields are cumulative or peak values; none of them decrease over
/// the lifetime of the pool they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePoolResourceUsage {
    /// Number of files ever allocated
    pub files_created: u64,
    /// Maximum number of simultaneously open files
    pub files_count_peak: u64,
    /// Maximum combined size of all simultaneously open files
    pub files_size_bytes_peak: u64,
    pub reads_count: u64,
    pub reads_size_bytes: u64,
    pub writes_count: u64,
    pub writes_size_bytes: u64,
    pub truncates_count: u64,
}

impl FilePoolResourceUsage {
    /// Auxiliary-metadata kind tag under which this record is attached to
    /// an execution response.
    pub const KIND: &'static str = "file_pool_resource_usage";
}

/// Shared bookkeeping state of one metered pool
///
/// Guarded by a single mutex; every update is O(1) and the lock is never
/// held across an inner I/O call.
#[derive(Debug, Default)]
struct PoolUsage {
    stats: FilePoolResourceUsage,
    live_files: u64,
    live_size_bytes: u64,
}

impl PoolUsage {
    /// Move a handle's recorded size from `current` to `new_size`,
    /// reconciling the pool-wide aggregate and its peak in the same
    /// critical section.
    fn reconcile_size(&mut self, current: &mut u64, new_size: u64) {
        self.live_size_bytes -= *current;
        *current = new_size;
        self.live_size_bytes += new_size;
        if self.stats.files_size_bytes_peak < self.live_size_bytes {
            self.stats.files_size_bytes_peak = self.live_size_bytes;
        }
    }
}

/// Decorator for FilePool that measures the number of files created and
/// the operations performed on them. One instance is created per action
/// execution; its final statistics are attached to the execution response.
pub struct MeteredFilePool<'a> {
    base: &'a dyn FilePool,
    usage: Arc<Mutex<PoolUsage>>,
}

impl<'a> MeteredFilePool<'a> {
    /// Wrap a pool with usage metering
    pub fn new(base: &'a dyn FilePool) -> Self {
        Self {
            base,
            usage: Arc::new(Mutex::new(PoolUsage::default())),
        }
    }

    /// Consistent snapshot of the usage counters
    pub fn usage(&self) -> FilePoolResourceUsage {
        self.usage.lock().stats.clone()
    }

    /// Current number of open handles (created but not closed)
    pub fn live_files(&self) -> u64 {
        self.usage.lock().live_files
    }

    /// Current combined size of all open handles
    pub fn live_size_bytes(&self) -> u64 {
        self.usage.lock().live_size_bytes
    }
}

impl FilePool for MeteredFilePool<'_> {
    fn new_file(&self) -> PoolResult<Box<dyn FileHandle>> {
        let file = self.base.new_file()?;

        let mut usage = self.usage.lock();
        usage.stats.files_created += 1;
        usage.live_files += 1;
        if usage.stats.files_count_peak < usage.live_files {
            usage.stats.files_count_peak = usage.live_files;
        }
        drop(usage);

        Ok(Box::new(MeteredFileHandle {
            inner: Some(file),
            usage: Arc::clone(&self.usage),
            size: 0,
        }))
    }
}

/// Decorator for FileHandle that feeds per-operation counters and the
/// live size aggregate of its owning pool.
struct MeteredFileHandle {
    inner: Option<Box<dyn FileHandle>>,
    usage: Arc<Mutex<PoolUsage>>,
    /// Last known logical size: furthest byte written or latest truncate
    size: u64,
}

impl FileHandle for MeteredFileHandle {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> PoolResult<usize> {
        let Some(inner) = self.inner.as_mut() else {
            return Err(PoolError::Closed);
        };
        let result = inner.read_at(buf, offset);

        let mut usage = self.usage.lock();
        usage.stats.reads_count += 1;
        if let Ok(n) = &result {
            usage.stats.reads_size_bytes += *n as u64;
        }
        drop(usage);

        result
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> PoolResult<usize> {
        let Some(inner) = self.inner.as_mut() else {
            return Err(PoolError::Closed);
        };
        let result = inner.write_at(buf, offset);

        let mut usage = self.usage.lock();
        usage.stats.writes_count += 1;
        if let Ok(n) = &result {
            let n = *n;
            usage.stats.writes_size_bytes += n as u64;
            let end = offset + n as u64;
            if n > 0 && end > self.size {
                usage.reconcile_size(&mut self.size, end);
            }
        }
        drop(usage);

        result
    }

    fn truncate(&mut self, length: u64) -> PoolResult<()> {
        let Some(inner) = self.inner.as_mut() else {
            return Err(PoolError::Closed);
        };
        let result = inner.truncate(length);

        let mut usage = self.usage.lock();
        usage.stats.truncates_count += 1;
        if result.is_ok() {
            usage.reconcile_size(&mut self.size, length);
        }
        drop(usage);

        result
    }

    fn close(mut self: Box<Self>) -> PoolResult<()> {
        // Live accounting is released in Drop, so a handle that is leaked
        // without an explicit close still leaves the aggregates balanced.
        match self.inner.take() {
            Some(inner) => inner.close(),
            None => Err(PoolError::Closed),
        }
    }
}

impl Drop for MeteredFileHandle {
    fn drop(&mut self) {
        let mut usage = self.usage.lock();
        usage.live_files -= 1;
        usage.live_size_bytes -= self.size;
    }
}
