use std::net::Ipv4Addr;
use std::time::Duration;

const SERVICE_PORT: &str = "CENTINELA_PORT";

const DEFAULT_PORT: u16 = 8080;

pub fn get_port() -> u16 {
    let port_from_env = std::env::var(SERVICE_PORT);
    port_from_env.map_or(DEFAULT_PORT, |res| res.parse().unwrap_or(DEFAULT_PORT))
}

const SERVICE_ADDR: &str = "CENTINELA_ADDR";

const DEFAULT_ADDR: Ipv4Addr = Ipv4Addr::new(0, 0, 0, 0);

pub fn get_addr() -> Ipv4Addr {
    let addr_from_env = std::env::var(SERVICE_ADDR);
    addr_from_env.map_or(DEFAULT_ADDR, |res| res.parse().unwrap_or(DEFAULT_ADDR))
}

const PROMETHEUS_URL: &str = "PROMETHEUS_URL";

const DEFAULT_PROMETHEUS_URL: &str = "http://127.0.0.1:9090";

pub fn get_prometheus_url() -> String {
    std::env::var(PROMETHEUS_URL).unwrap_or_else(|_| DEFAULT_PROMETHEUS_URL.to_string())
}

const INFERENCE_URL: &str = "INFERENCE_URL";

const DEFAULT_INFERENCE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

pub fn get_inference_url() -> String {
    std::env::var(INFERENCE_URL).unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string())
}

const INFERENCE_API_KEY: &str = "GEMINI_API_KEY";

pub fn get_inference_api_key() -> Option<String> {
    let key_from_env = std::env::var(INFERENCE_API_KEY);
    key_from_env.ok()
}

const INFERENCE_TIMEOUT_SECS: &str = "INFERENCE_TIMEOUT_SECS";

const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 10;

pub fn get_inference_timeout() -> Duration {
    let secs = std::env::var(INFERENCE_TIMEOUT_SECS).map_or(DEFAULT_INFERENCE_TIMEOUT_SECS, |res| {
        res.parse().unwrap_or(DEFAULT_INFERENCE_TIMEOUT_SECS)
    });
    Duration::from_secs(secs)
}
