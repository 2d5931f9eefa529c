//! Configuration schema.
//!
//! The configuration supplies process metadata, exactly one agent reference
//! with constructor arguments, an ordered list of route definitions, and an
//! optional table of named JSON Schema documents referenced by routes.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application metadata.
    #[serde(default)]
    pub app: AppConfig,

    /// HTTP server binding.
    #[serde(default)]
    pub server: ServerConfig,

    /// The single agent exposed by this process.
    pub agent: AgentConfig,

    /// Configured routes, registered in declaration order.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    /// Named JSON Schema documents referenced by routes.
    #[serde(default)]
    pub schemas: HashMap<String, Value>,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            version: default_version(),
            description: None,
        }
    }
}

fn default_title() -> String {
    "Agentgate API".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// HTTP server binding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Configuration for instantiating the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Registered agent kind to instantiate.
    pub kind: String,

    /// Constructor arguments passed to the agent factory.
    #[serde(default)]
    pub init: serde_json::Map<String, Value>,
}

/// HTTP methods accepted by route definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl Default for HttpMethod {
    fn default() -> Self {
        Self::Post
    }
}

/// Definition of a single HTTP endpoint that calls into the agent.
///
/// Immutable after startup; built once from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Unique route name.
    pub name: String,

    /// URL path, e.g. `/invoke`.
    pub path: String,

    #[serde(default)]
    pub method: HttpMethod,

    /// Short human-readable label, reported when the route is registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Longer free-form description, reported when the route is registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name of the agent method this route invokes.
    pub agent_method: String,

    /// Name of a declared schema the request payload must satisfy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_schema: Option<String>,

    /// Name of a declared schema the scalar response must satisfy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<String>,

    /// Mapping from agent method parameter names to payload field names.
    ///
    /// When empty, every payload field is passed through under its own name.
    #[serde(default)]
    pub parameter_mapping: BTreeMap<String, String>,

    /// Extra parameters always passed to the agent method.
    #[serde(default)]
    pub constant_parameters: serde_json::Map<String, Value>,

    /// Whether the agent method produces a stream of chunks.
    #[serde(default)]
    pub stream: bool,

    /// Media type used when streaming responses.
    #[serde(default = "default_stream_media_type")]
    pub stream_media_type: String,

    /// If set, the scalar result is wrapped under this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_envelope: Option<String>,
}

fn default_stream_media_type() -> String {
    "text/event-stream".to_string()
}
