//! Bundled echo agent.
//!
//! A minimal agent used to demonstrate the gateway and exercise both
//! outcome shapes: `invoke` returns a scalar result, `stream` yields one
//! chunk per whitespace token followed by a final chunk.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use agentgate_core::{
    Agent, AgentError, AgentOutcome, AgentRegistry, CallArgs, ValueStream,
};

/// Echo agent: repeats its input back under a configurable prefix.
pub struct EchoAgent {
    prefix: String,
}

impl EchoAgent {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn input_arg(args: &CallArgs) -> Result<&str, AgentError> {
        args.get("input")
            .and_then(Value::as_str)
            .ok_or_else(|| AgentError::ExecutionFailed("missing 'input' argument".to_string()))
    }

    fn echo(&self, args: &CallArgs) -> Result<Value, AgentError> {
        let input = Self::input_arg(args)?;
        let turns = args
            .get("conversation")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
            + 1;

        Ok(json!({
            "output": format!("{}: {}", self.prefix, input),
            "metadata": { "turns": turns, "prefix": self.prefix }
        }))
    }

    fn token_stream(&self, args: &CallArgs) -> Result<ValueStream, AgentError> {
        let input = Self::input_arg(args)?.to_string();
        let final_text = format!("{}: {}", self.prefix, input);

        let chunks: Vec<Value> = input
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| json!({ "event": "token", "data": token, "index": index }))
            .chain(std::iter::once(json!({ "event": "final", "data": final_text })))
            .collect();

        Ok(Box::pin(futures::stream::iter(chunks.into_iter().map(Ok))))
    }
}

#[async_trait]
impl Agent for EchoAgent {
    fn method_names(&self) -> Vec<String> {
        vec!["invoke".to_string(), "stream".to_string()]
    }

    async fn invoke(&self, method: &str, args: CallArgs) -> Result<AgentOutcome, AgentError> {
        match method {
            "invoke" => Ok(AgentOutcome::Scalar(self.echo(&args)?)),
            "stream" => Ok(AgentOutcome::Stream(self.token_stream(&args)?)),
            other => Err(AgentError::MethodNotFound(other.to_string())),
        }
    }
}

/// Register the echo agent factory under the `echo` kind.
///
/// Init arguments: `prefix` (string, default `"Echo"`).
pub fn register(registry: &AgentRegistry) -> Result<(), AgentError> {
    registry.register(
        "echo",
        Arc::new(|init: &Map<String, Value>| {
            let prefix = init
                .get("prefix")
                .and_then(Value::as_str)
                .unwrap_or("Echo");
            Ok(Arc::new(EchoAgent::new(prefix)) as Arc<dyn Agent>)
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn args(value: Value) -> CallArgs {
        match value {
            Value::Object(map) => map,
            _ => panic!("args fixture must be an object"),
        }
    }

    #[tokio::test]
    async fn test_invoke_echoes_with_prefix() {
        let agent = EchoAgent::new("Test");
        let outcome = agent
            .invoke("invoke", args(json!({ "input": "ping" })))
            .await
            .unwrap();

        let AgentOutcome::Scalar(value) = outcome else {
            panic!("expected scalar");
        };
        assert_eq!(value["output"], json!("Test: ping"));
        assert_eq!(value["metadata"]["turns"], json!(1));
        assert_eq!(value["metadata"]["prefix"], json!("Test"));
    }

    #[tokio::test]
    async fn test_invoke_counts_conversation_turns() {
        let agent = EchoAgent::new("Test");
        let payload = json!({
            "input": "ping",
            "conversation": [{ "role": "user", "content": "ping" }]
        });
        let outcome = agent.invoke("invoke", args(payload)).await.unwrap();

        let AgentOutcome::Scalar(value) = outcome else {
            panic!("expected scalar");
        };
        assert_eq!(value["metadata"]["turns"], json!(2));
    }

    #[tokio::test]
    async fn test_stream_yields_tokens_then_final() {
        let agent = EchoAgent::new("Test");
        let outcome = agent
            .invoke("stream", args(json!({ "input": "hello world" })))
            .await
            .unwrap();

        let AgentOutcome::Stream(stream) = outcome else {
            panic!("expected stream");
        };
        let chunks: Vec<_> = stream.map(|c| c.unwrap()).collect().await;

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0]["event"], json!("token"));
        assert_eq!(chunks[0]["data"], json!("hello"));
        assert_eq!(chunks[1]["data"], json!("world"));
        assert_eq!(chunks[2]["event"], json!("final"));
        assert_eq!(chunks[2]["data"], json!("Test: hello world"));
    }

    #[tokio::test]
    async fn test_missing_input_fails() {
        let agent = EchoAgent::new("Test");
        let err = agent.invoke("invoke", CallArgs::new()).await.unwrap_err();
        assert!(err.to_string().contains("input"));
    }

    #[tokio::test]
    async fn test_unknown_method_fails() {
        let agent = EchoAgent::new("Test");
        let err = agent.invoke("reset", CallArgs::new()).await.unwrap_err();
        assert!(matches!(err, AgentError::MethodNotFound(m) if m == "reset"));
    }

    #[test]
    fn test_register_installs_echo_factory() {
        let registry = AgentRegistry::new();
        register(&registry).unwrap();

        assert!(registry.contains("echo"));

        let mut init = Map::new();
        init.insert("prefix".to_string(), json!("Custom"));
        let agent = registry.create("echo", &init).unwrap();
        assert!(agent.has_method("invoke"));
        assert!(agent.has_method("stream"));
    }
}
