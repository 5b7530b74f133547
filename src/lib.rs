/*!
 * Build Worker Library
 * Remote build execution with pooled scratch files and usage metering
 */

pub mod executor;
pub mod filepool;

// Re-exports
pub use executor::{
    attach_error, ActionResult, AuxiliaryMetadata, BuildExecutor, ExecuteRequest, ExecuteResponse,
    ExecutionMetadata, ExecutionUpdate, ExecutorError, FilePoolStatsExecutor, InstanceName,
};
pub use filepool::{
    EmptyPool, FileHandle, FilePool, FilePoolResourceUsage, MemPool, MeteredFilePool, PoolError,
    PoolResult,
};
