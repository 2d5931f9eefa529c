//! Agent method dispatch.

use std::sync::Arc;

use tracing::{debug, error};

use agentgate_core::{Agent, AgentOutcome, CallArgs};

use crate::error::ApiError;

/// Invoke the bound agent method with the finished call arguments.
///
/// The future is awaited to completion; no retries and no timeout are
/// applied at this layer. Errors raised by the agent are logged and
/// propagated unmodified — classification into scalar or stream outcomes
/// is the agent's own responsibility.
pub async fn dispatch(
    agent: &Arc<dyn Agent>,
    method: &str,
    args: CallArgs,
) -> Result<AgentOutcome, ApiError> {
    debug!(method, args = args.len(), "dispatching agent call");
    agent.invoke(method, args).await.map_err(|e| {
        error!(method, "agent execution failed: {e}");
        ApiError::from(e)
    })
}
