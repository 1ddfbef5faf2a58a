use std::net::SocketAddr;
use std::time::Duration;

use tracing::trace;

use crate::util;

/// Runtime configuration, resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Base URL of the metrics backend (instant-query endpoint lives under it)
    pub prometheus_url: String,

    /// Full URL of the inference endpoint
    pub inference_url: String,

    /// Pre-shared key for the inference endpoint. Absence is not fatal at
    /// startup; requests fail as upstream errors instead.
    pub inference_api_key: Option<String>,

    /// Client-side timeout for the inference call
    pub inference_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Self {
            bind_addr: SocketAddr::from((util::get_addr(), util::get_port())),
            prometheus_url: util::get_prometheus_url(),
            inference_url: util::get_inference_url(),
            inference_api_key: util::get_inference_api_key(),
            inference_timeout: util::get_inference_timeout(),
        };
        trace!("resolved config: {config:?}");
        config
    }
}
