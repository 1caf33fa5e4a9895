use std::fs::read_to_string;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::model::{Method, RequestOptions};


pub mod reqwest;

/// Sends a request built by a [`RequestFactory`] along with its parameters.
pub trait Transport {
    type Request;
    type Response;

    fn send(
        &self,
        request: Self::Request,
        options: RequestOptions,
    ) -> anyhow::Result<Self::Response>;
}

/// Builds a protocol level request for a method and URL.
pub trait RequestFactory<R> {
    fn get_request(&self, method: Method, url: &str) -> anyhow::Result<R>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub ssl_check: bool,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ssl_check: true,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool) -> Self {
        Self {
            ssl_check,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).with_context(|| "Failed parsing client config")?;
        if !value.is_object() {
            bail!("Client config must be a JSON object");
        }
        serde_json::from_value(value).with_context(|| "Invalid client config")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = read_to_string(path)
            .with_context(|| format!("Failed opening client config: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Invalid client config: {:?}", path))
    }
}
