use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub const DEFAULT_CATALOG_URL: &str = "https://japceibal.github.io/japflix_api/movies-data.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub catalog_url: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let catalog_url =
            std::env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        let http_timeout_secs: u64 =
            std::env::var("HTTP_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok()).unwrap_or(30);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            catalog_url,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}
