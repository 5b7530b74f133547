/*!
 * In-Memory File Pool
 * Fast, volatile scratch storage for tests and small actions
 */

use super::traits::{FileHandle, FilePool};
use super::types::PoolResult;

/// In-memory file pool
///
/// Every allocated file lives in a private growable buffer owned by its
/// handle. Contents are lost when the handle is closed or dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemPool;

impl MemPool {
    /// Create new in-memory pool
    pub fn new() -> Self {
        Self
    }
}

impl FilePool for MemPool {
    fn new_file(&self) -> PoolResult<Box<dyn FileHandle>> {
        Ok(Box::new(MemScratchFile { data: Vec::new() }))
    }
}

/// In-memory scratch file
struct MemScratchFile {
    data: Vec<u8>,
}

impl FileHandle for MemScratchFile {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> PoolResult<usize> {
        let offset = offset as usize;
        if offset >= self.data.len() {
            return Ok(0);
        }
        let available = &self.data[offset..];
        let n = buf.len().min(available.len());
        buf[..n].copy_from_slice(&available[..n]);
        Ok(n)
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> PoolResult<usize> {
        if buf.is_empty() {
            // A zero-length write never extends the file
            return Ok(0);
        }
        let offset = offset as usize;
        let end = offset + buf.len();
        if end > self.data.len() {
            // Zero-fill any gap between the old end and the write offset
            self.data.resize(end, 0);
        }
        self.data[offset..end].copy_from_slice(buf);
        Ok(buf.len())
    }

    fn truncate(&mut self, length: u64) -> PoolResult<()> {
        self.data.resize(length as usize, 0);
        Ok(())
    }

    fn close(self: Box<Self>) -> PoolResult<()> {
        Ok(())
    }
}
