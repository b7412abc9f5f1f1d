//! Binary Configuration
//!
//! Explicit configuration for the server and demo client binaries. The
//! recognized options are enumerated here instead of being scattered over
//! the argument loop: region name, bind address, and (client side) the
//! server address that switches the repository from local to
//! client/server topology.

use anyhow::Result;
use std::net::SocketAddr;

/// Region name used when `--region` is not given.
pub const DEFAULT_REGION_NAME: &str = "customers";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub region_name: String,
}

impl ServerConfig {
    /// Parses `--bind <addr:port> [--region <name>]`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut bind: Option<SocketAddr> = None;
        let mut region_name = DEFAULT_REGION_NAME.to_string();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--bind requires a value"))?;
                    bind = Some(value.parse()?);
                    i += 2;
                }
                "--region" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--region requires a value"))?;
                    region_name = value.clone();
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let bind = bind.ok_or_else(|| anyhow::anyhow!("--bind is required"))?;

        Ok(Self { bind, region_name })
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Grid server to forward operations to. `None` runs the repository
    /// against an embedded local region.
    pub server: Option<SocketAddr>,
    pub region_name: String,
}

impl ClientConfig {
    /// Parses `[--server <addr:port>] [--region <name>]`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut server: Option<SocketAddr> = None;
        let mut region_name = DEFAULT_REGION_NAME.to_string();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--server" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--server requires a value"))?;
                    server = Some(value.parse()?);
                    i += 2;
                }
                "--region" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("--region requires a value"))?;
                    region_name = value.clone();
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        Ok(Self {
            server,
            region_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn test_server_config_parses_bind_and_region() {
        let config =
            ServerConfig::from_args(&args(&["--bind", "127.0.0.1:6000", "--region", "people"]))
                .unwrap();

        assert_eq!(config.bind, "127.0.0.1:6000".parse().unwrap());
        assert_eq!(config.region_name, "people");
    }

    #[test]
    fn test_server_config_defaults_region_name() {
        let config = ServerConfig::from_args(&args(&["--bind", "127.0.0.1:6000"])).unwrap();

        assert_eq!(config.region_name, DEFAULT_REGION_NAME);
    }

    #[test]
    fn test_server_config_requires_bind() {
        assert!(ServerConfig::from_args(&args(&["--region", "people"])).is_err());
    }

    #[test]
    fn test_server_config_rejects_dangling_flag() {
        assert!(ServerConfig::from_args(&args(&["--bind"])).is_err());
    }

    #[test]
    fn test_client_config_without_server_is_local() {
        let config = ClientConfig::from_args(&args(&[])).unwrap();

        assert!(config.server.is_none());
        assert_eq!(config.region_name, DEFAULT_REGION_NAME);
    }

    #[test]
    fn test_client_config_with_server() {
        let config = ClientConfig::from_args(&args(&["--server", "127.0.0.1:6000"])).unwrap();

        assert_eq!(config.server, Some("127.0.0.1:6000".parse().unwrap()));
    }

    #[test]
    fn test_client_config_rejects_bad_address() {
        assert!(ClientConfig::from_args(&args(&["--server", "not-an-addr"])).is_err());
    }
}
