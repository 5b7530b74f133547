/*!
 * File Pool Stats Executor
 * Decorator that annotates responses with scratch-file usage statistics
 */

use tracing::{debug, warn};

use crate::filepool::{FilePool, FilePoolResourceUsage, MeteredFilePool};

use super::traits::BuildExecutor;
use super::types::{
    attach_error, AuxiliaryMetadata, ExecuteRequest, ExecuteResponse, ExecutionUpdate,
    ExecutorError, InstanceName,
};

/// Decorator for BuildExecutor that annotates responses with usage
/// statistics of the file pool. File pools are used to allocate temporary
/// files generated by the build action (e.g., output files).
///
/// Instrumentation is strictly best-effort: the wrapped executor's
/// outcome is returned unchanged, and a failure to attach statistics
/// degrades to a diagnostic on the response.
pub struct FilePoolStatsExecutor<E> {
    inner: E,
}

impl<E> FilePoolStatsExecutor<E> {
    /// Wrap an executor with file pool metering
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: BuildExecutor> BuildExecutor for FilePoolStatsExecutor<E> {
    fn execute(
        &self,
        pool: &dyn FilePool,
        instance: &InstanceName,
        request: &ExecuteRequest,
        updates: &flume::Sender<ExecutionUpdate>,
    ) -> ExecuteResponse {
        let metered = MeteredFilePool::new(pool);
        let mut response = self.inner.execute(&metered, instance, request, updates);

        let usage = metered.usage();
        debug!(
            instance = %instance,
            files_created = usage.files_created,
            files_size_bytes_peak = usage.files_size_bytes_peak,
            "harvested file pool usage"
        );

        match AuxiliaryMetadata::pack(FilePoolResourceUsage::KIND, &usage) {
            Ok(entry) => response
                .result
                .execution_metadata
                .auxiliary_metadata
                .push(entry),
            Err(err) => {
                warn!(error = %err, "failed to marshal file pool resource usage");
                attach_error(
                    &mut response,
                    ExecutorError::MetadataSerialization(format!(
                        "failed to marshal file pool resource usage: {err}"
                    )),
                );
            }
        }
        response
    }
}
