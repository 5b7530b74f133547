/*!
 * File Pool Traits
 * Core scratch-file abstraction traits
 */

use super::types::PoolResult;

/// Scratch-file pool
///
/// A factory for ephemeral, anonymous read/write files used by build
/// actions as temporary storage (e.g., output files under construction).
/// Files have no name and no directory entry; they exist only through
/// their handle and are released when the handle is closed.
pub trait FilePool: Send + Sync {
    /// Allocate a new empty scratch file
    fn new_file(&self) -> PoolResult<Box<dyn FileHandle>>;
}

/// Open scratch-file handle
///
/// Random-access reads and writes at explicit offsets; no cursor.
/// Operations may transfer fewer bytes than requested.
pub trait FileHandle: Send {
    /// Read up to `buf.len()` bytes at `offset`, returning the number of
    /// bytes read. A read at or past end-of-file returns `Ok(0)`.
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> PoolResult<usize>;

    /// Write `buf` at `offset`, returning the number of bytes accepted.
    /// Writing past end-of-file extends the file.
    fn write_at(&mut self, buf: &[u8], offset: u64) -> PoolResult<usize>;

    /// Set the file length, discarding data past `length` or extending
    /// with zeroes.
    fn truncate(&mut self, length: u64) -> PoolResult<()>;

    /// Close the handle and release the underlying file. Consumes the
    /// handle, so a closed handle cannot be used again.
    fn close(self: Box<Self>) -> PoolResult<()>;
}
