use std::net::{IpAddr, SocketAddr};

use card_deck_core::SeedPolicy;
use clap::Parser;

/// Command-line configuration for the deck server.
#[derive(Parser, Debug, Clone)]
#[command(name = "card_deck_server", about = "HTTP service for creating and drawing from card decks")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Fixed seed for shuffling; seeded from the clock when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed.map_or(SeedPolicy::Clock, SeedPolicy::Fixed)
    }
}
