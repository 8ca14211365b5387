//! Client-wide settings merged into every compiled request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema PostgREST serves when no profile header is sent
pub const DEFAULT_SCHEMA: &str = "public";

/// Static settings shared by all requests of one client.
///
/// Can be built fluently or loaded from any serde format:
///
/// ```ignore
/// let options = ClientOptions::default()
///     .with_schema("api")
///     .with_header("apikey", key);
///
/// let options: ClientOptions = toml::from_str(r#"
///     schema = "api"
///     [headers]
///     apikey = "..."
/// "#)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Target schema; `None` or `"public"` sends no profile header
    pub schema: Option<String>,
    /// Query parameters prepended to every request
    pub query_params: BTreeMap<String, String>,
    /// Headers added to every request
    pub headers: BTreeMap<String, String>,
}

impl ClientOptions {
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The schema to name in profile headers, if it is not the default one
    pub fn profile(&self) -> Option<&str> {
        self.schema
            .as_deref()
            .filter(|schema| !schema.is_empty() && *schema != DEFAULT_SCHEMA)
    }
}
