use anyhow::{Context, Result};
use std::env;

use crate::query::parse_flag;

/// Which of the two services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Orders,
    Kitchen,
}

impl ServiceKind {
    pub fn default_port(self) -> u16 {
        match self {
            Self::Orders => 8000,
            Self::Kitchen => 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub service: ServiceKind,
    pub host: String,
    pub port: u16,
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
    /// Kitchen only: re-check stored schedules on every list request.
    pub revalidate_on_list: bool,
}

impl AppConfig {
    pub fn from_env(service: ServiceKind) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    pub fn from_lookup(service: ServiceKind, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("APP_PORT") {
            Some(raw) => raw.parse::<u16>().context("APP_PORT must be a valid u16")?,
            None => service.default_port(),
        };

        let buffer_size = match lookup("ACTOR_BUFFER_SIZE") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .context("ACTOR_BUFFER_SIZE must be a positive integer")?,
            None => 32,
        };

        let revalidate_on_list = match lookup("KITCHEN_REVALIDATE_ON_LIST") {
            Some(raw) => parse_flag(&raw).context("KITCHEN_REVALIDATE_ON_LIST must be true or false")?,
            None => false,
        };

        Ok(Self {
            service,
            host,
            port,
            buffer_size,
            revalidate_on_list,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
