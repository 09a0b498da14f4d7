use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_tcp_timeout_secs")]
    pub tcp_timeout_secs: u64,

    /// Response code sent when no handler in the chain answers a query.
    #[serde(default)]
    pub fallback_rcode: FallbackRcode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            tcp_timeout_secs: default_tcp_timeout_secs(),
            fallback_rcode: FallbackRcode::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackRcode {
    #[default]
    ServFail,
    Refused,
    NxDomain,
}

impl FallbackRcode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackRcode::ServFail => "SERVFAIL",
            FallbackRcode::Refused => "REFUSED",
            FallbackRcode::NxDomain => "NXDOMAIN",
        }
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_tcp_timeout_secs() -> u64 {
    10
}
