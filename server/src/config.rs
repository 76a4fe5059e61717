//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::logging::LogFormat;

/// In-memory todo CRUD service.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "TODO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags() {
        let config = Config::try_parse_from([
            "todo-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.bind_address(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn short_port_flag() {
        let config = Config::try_parse_from(["todo-server", "-p", "9000"]).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::try_parse_from(["todo-server", "--log-format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_port() {
        let result = Config::try_parse_from(["todo-server", "--port", "70000"]);
        assert!(result.is_err());
    }
}
