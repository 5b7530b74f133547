/*!
 * Executor Types
 * Request, response and auxiliary-metadata types for action execution
 */

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Executor errors with structured, type-safe error handling
///
/// Serialization uses tagged enum pattern for type safety.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum ExecutorError {
    #[error("Action failed: {0}")]
    ActionFailed(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Failed to marshal auxiliary metadata: {0}")]
    MetadataSerialization(String),
}

/// Name of the remote-execution instance an action belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceName(String);

impl InstanceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstanceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Description of the action an executor should run
///
/// Opaque to decorators; only the inner executor interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    /// Digest of the action to execute
    pub action_digest: String,
    /// Command line arguments of the action
    pub arguments: Vec<String>,
}

/// Progress report emitted while an action executes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionUpdate {
    Started,
    FetchingInputs,
    Running,
    UploadingOutputs,
}

/// Typed, self-describing payload attached to an execution response
///
/// `kind` names the payload type; `payload` is its JSON encoding. This is
/// the side channel through which decorators report resource usage and
/// similar telemetry without touching the action's primary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryMetadata {
    pub kind: String,
    pub payload: serde_json::Value,
}

impl AuxiliaryMetadata {
    /// Pack a value under a kind tag
    pub fn pack<T: Serialize>(kind: &str, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            kind: kind.to_string(),
            payload: serde_json::to_value(value)?,
        })
    }

    /// Recover the typed payload
    pub fn unpack<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

/// Metadata describing how an action was executed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionMetadata {
    /// Ordered list of typed side-channel entries
    pub auxiliary_metadata: Vec<AuxiliaryMetadata>,
}

/// Primary outcome of an executed action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    pub exit_code: i32,
    pub execution_metadata: ExecutionMetadata,
}

/// Full response of one action execution
///
/// `status` is `None` when the result is authoritative; `Some` carries the
/// first error attached to this response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub result: ActionResult,
    pub status: Option<ExecutorError>,
}

impl ExecuteResponse {
    pub fn with_result(result: ActionResult) -> Self {
        Self {
            result,
            status: None,
        }
    }
}

/// Attach an error to an already-produced response without masking an
/// earlier one: only the first error attached is kept.
pub fn attach_error(response: &mut ExecuteResponse, error: ExecutorError) {
    if response.status.is_none() {
        response.status = Some(error);
    }
}
