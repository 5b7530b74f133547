/*!
 * File Pool Module
 * Ephemeral scratch-file allocation for build actions
 */

pub mod empty;
pub mod memory;
pub mod metered;
pub mod traits;
pub mod types;

// Re-exports
pub use empty::EmptyPool;
pub use memory::MemPool;
pub use metered::{FilePoolResourceUsage, MeteredFilePool};
pub use traits::{FileHandle, FilePool};
pub use types::{PoolError, PoolResult};
