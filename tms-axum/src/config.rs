//! Server settings.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use tms_core::models::Page;

/// Where the API listens and how much a single list request may return.
///
/// ```
/// use tms_axum::config::AxumConfig;
///
/// let config = AxumConfig {
///     page_limit: 20,
///     ..Default::default()
/// };
/// // Clients asking for more than the limit get a capped page
/// assert_eq!(config.page(50, 10).limit, 20);
/// assert_eq!(config.page(5, 10).limit, 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The socket to accept connections on
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// The largest page any list endpoint returns
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl AxumConfig {
    /// The page requested by a client, capped to `page_limit`.
    pub fn page(&self, limit: u32, offset: u32) -> Page {
        Page {
            limit: limit.min(self.page_limit),
            offset,
        }
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
}

fn default_page_limit() -> u32 {
    100
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            page_limit: default_page_limit(),
        }
    }
}
