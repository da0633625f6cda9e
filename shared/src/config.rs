use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: env_or("PORT", 8080)?,
        };
        let auth = AuthConfig {
            ttl: env_or("TOKEN_TTL", 86400)?,
        };
        Ok(Self { server, auth })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Access token time-to-live in seconds.
    pub ttl: u64,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("failed to parse environment variable {key}")),
        Err(_) => Ok(default),
    }
}
