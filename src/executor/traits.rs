/*!
 * Executor Traits
 * Core action-execution abstraction
 */

use crate::filepool::FilePool;

use super::types::{ExecuteRequest, ExecuteResponse, ExecutionUpdate, InstanceName};

/// Action executor
///
/// Runs one build action to completion, allocating temporary files from
/// the given pool and reporting progress over the updates channel. The
/// call blocks for the action's full duration. Implementations never
/// panic on action failure; failure is expressed through the response.
pub trait BuildExecutor: Send + Sync {
    fn execute(
        &self,
        pool: &dyn FilePool,
        instance: &InstanceName,
        request: &ExecuteRequest,
        updates: &flume::Sender<ExecutionUpdate>,
    ) -> ExecuteResponse;
}
