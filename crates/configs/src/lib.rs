use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unknown log format `{other}`; expected `compact` or `json`")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String { DEFAULT_HOST.into() }
fn default_port() -> u16 { DEFAULT_PORT }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
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
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first; only when it does not exist, build one from
    /// `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `LOG_FORMAT`.
    /// A file that exists but fails to read, parse or validate is an error.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).map_err(|e| anyhow!("invalid config file {path}: {e}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_env()?,
            Err(e) => return Err(anyhow!("cannot read config file {path}: {e}")),
        };
        cfg.normalize_and_validate()
            .map_err(|e| anyhow!("invalid config {path}: {e}"))?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            cfg.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow!("SERVER_PORT `{port}` is not a valid port: {e}"))?;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            cfg.logging.format = format.parse()?;
        }
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        Ok(())
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
            Some(0) | None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let mut cfg = parse("").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }

    #[test]
    fn full_document_is_parsed() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8088
            worker_threads = 2

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.server.bind_addr().unwrap().port(), 8088);
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn blank_host_and_zero_threads_are_normalized() {
        let mut cfg = parse("[server]\nhost = \"  \"\nworker_threads = 0\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn unknown_log_format_fails_to_parse() {
        assert!(parse("[logging]\nformat = \"xml\"\n").is_err());
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent-config-for-tests.toml").is_err());
    }

    fn write_temp(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("categories_cfg_{}_{}.toml", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn invalid_file_is_not_replaced_by_env_defaults() {
        let path = write_temp("zero_port", "[server]\nport = 0\n[logging]\nformat = \"json\"\n");
        let err = AppConfig::load_or_env_from(&path).unwrap_err();
        assert!(err.to_string().contains("server.port"));
        let _ = std::fs::remove_file(&path);

        let path = write_temp("broken_toml", "[server\nport = 8080\n");
        assert!(AppConfig::load_or_env_from(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn valid_file_is_honoured() {
        let path = write_temp("valid", "[server]\nport = 8089\n[logging]\nformat = \"json\"\n");
        let cfg = AppConfig::load_or_env_from(&path).unwrap();
        assert_eq!(cfg.server.port, 8089);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn absent_file_falls_back_to_env() {
        assert!(AppConfig::load_or_env_from("/nonexistent-config-for-tests.toml").is_ok());
    }
}
