/*!
 * Build Executor Module
 * Action execution pipeline and its decorators
 */

pub mod filepool_stats;
pub mod traits;
pub mod types;

// Re-exports
pub use filepool_stats::FilePoolStatsExecutor;
pub use traits::BuildExecutor;
pub use types::{
    attach_error, ActionResult, AuxiliaryMetadata, ExecuteRequest, ExecuteResponse,
    ExecutionMetadata, ExecutionUpdate, ExecutorError, InstanceName,
};
