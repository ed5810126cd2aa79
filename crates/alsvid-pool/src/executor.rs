//! The executor contract the pool runs on behalf of.

use alsvid_types::ExecutionOutputs;

/// External trial executor: runs a batch of shots and returns the partial
/// results for this process.
///
/// The circuit, noise configuration, and seed are construction-time
/// concerns of the implementation — a local statevector simulator, a
/// density-matrix simulator, or a remote hardware backend. The pool only
/// ever hands it the local shot quota.
///
/// # Contract
///
/// - `execute(shots)` MUST return a histogram whose counts sum to exactly
///   `shots`.
/// - Which optional fields are populated MUST be fixed by configuration
///   and identical on every rank of the pool; the report envelope turns a
///   violation into an immediate protocol error on the supervisor.
pub trait ShotExecutor {
    /// Executor-specific failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run `shots` independent trials and return this process's partial
    /// results.
    fn execute(&mut self, shots: u32) -> Result<ExecutionOutputs, Self::Error>;
}
