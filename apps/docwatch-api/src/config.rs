//! Server configuration from command line and environment

use std::net::{IpAddr, SocketAddr};

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "docwatch-api")]
#[command(version, about = "Radiotherapy document consistency audit API")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "DOCWATCH_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
