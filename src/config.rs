use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| "Missing required environment variable: DATABASE_URL".to_string())?;

        let host: IpAddr = env_or("PROJECTS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PROJECTS_HOST: {e}"))?;

        let port: u16 = env_or("PROJECTS_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PROJECTS_PORT: {e}"))?;

        let max_connections: u32 = env_or("PROJECTS_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid PROJECTS_MAX_CONNECTIONS: {e}"))?;

        let max_body_size: usize = env_or("PROJECTS_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid PROJECTS_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("PROJECTS_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
            max_body_size,
            log_level,
        })
    }
}
