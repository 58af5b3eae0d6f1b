use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8000;

/// Process-level settings. Service-specific knobs (completion endpoint,
/// synthesizer binary) are read by the services themselves.
#[derive(Debug, Clone)]
pub struct Config {
    addr: SocketAddr,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env_parse::<IpAddr>("HOST").unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port = env_parse::<u16>("PORT").unwrap_or(DEFAULT_PORT);
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            addr: SocketAddr::new(host, port),
            log_level,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.addr
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parse_rejects_garbage() {
        std::env::set_var("AWAL_TEST_PORT", "not-a-port");
        assert_eq!(env_parse::<u16>("AWAL_TEST_PORT"), None);
        std::env::set_var("AWAL_TEST_PORT", " 8123 ");
        assert_eq!(env_parse::<u16>("AWAL_TEST_PORT"), Some(8123));
    }
}
