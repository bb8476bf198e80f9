use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 2033;
const DEFAULT_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    /// Apply pending migrations when the server starts.
    #[serde(default = "default_true")]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            auto_migrate: true,
        }
    }
}

/// Single front-end origin allowed to call the API from a browser.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origin: default_origin() }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_origin() -> String { DEFAULT_ORIGIN.to_string() }
fn default_request_timeout() -> u64 { 30 }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file first; when it cannot be read, build everything from environment variables.
    pub fn load_or_env() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(_) => Self::from_env(),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        if let Some(t) = std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse::<u64>().ok()) {
            cfg.server.request_timeout_secs = t;
        }
        if let Ok(origin) = std::env::var("CORS_ALLOWED_ORIGIN") {
            cfg.cors.allowed_origin = origin;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.cors.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("server.request_timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl CorsConfig {
    fn validate(&self) -> Result<()> {
        let origin = self.allowed_origin.trim();
        if origin == "*" {
            return Ok(());
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(anyhow!("cors.allowed_origin must be an http(s) origin or \"*\""));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [server]
        host = "0.0.0.0"
        port = 9000
        worker_threads = 2
        request_timeout_secs = 5

        [database]
        url = "postgres://app:secret@db:5432/locations"
        max_connections = 20
        min_connections = 5

        [cors]
        allowed_origin = "https://weather.example.com"
    "#;

    #[test]
    fn parses_full_file() {
        let mut cfg = parse(FULL).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.server.request_timeout_secs, 5);
        assert_eq!(cfg.database.max_connections, 20);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        assert!(cfg.database.auto_migrate);
        assert_eq!(cfg.cors.allowed_origin, "https://weather.example.com");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse(r#"[database]
url = "postgres://localhost/x""#).unwrap();
        assert_eq!(cfg.server.port, 2033);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.cors.allowed_origin, "http://localhost:5173");
        assert_eq!(cfg.database.min_connections, 2);
    }

    #[test]
    fn rejects_non_postgres_url() {
        let mut cfg = parse(r#"[database]
url = "mysql://localhost/x""#).unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/x".into(),
            max_connections: 1,
            min_connections: 4,
            ..DatabaseConfig::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut server = ServerConfig { worker_threads: Some(0), ..ServerConfig::default() };
        server.normalize().unwrap();
        assert_eq!(server.worker_threads, Some(4));
    }

    #[test]
    fn rejects_bad_origin() {
        let cors = CorsConfig { allowed_origin: "localhost:5173".into() };
        assert!(cors.validate().is_err());
        let any = CorsConfig { allowed_origin: "*".into() };
        assert!(any.validate().is_ok());
    }
}
