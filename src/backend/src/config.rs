use anyhow::{Context, Result};
use std::{env, path::PathBuf, sync::OnceLock, time::Duration};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// UI server configuration
    pub ui: UiConfig,

    /// Database reachability check configuration
    pub database: DatabaseConfig,

    /// TLS certificate configuration, plain HTTP when absent
    pub certificate: Option<CertificateConfig>,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// `<host>:<port>` of the database server
    pub address: String,
    pub connect_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct CertificateConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// On first call, it loads and validates all configuration from environment
    /// variables. Subsequent calls return the cached instance.
    ///
    /// # Panics
    /// Panics if configuration loading fails. Call [`AppConfig::load`] first to
    /// surface the error instead.
    pub fn get() -> &'static Self {
        Self::cell()
            .get_or_init(|| Self::load_internal().expect("failed to load application configuration"))
    }

    /// Load the configuration into the cache, returning loading errors
    pub fn load() -> Result<&'static Self> {
        if let Some(config) = Self::cell().get() {
            return Ok(config);
        }
        let config = Self::load_internal()?;
        Ok(Self::cell().get_or_init(|| config))
    }

    fn cell() -> &'static OnceLock<AppConfig> {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        &APP_CONFIG
    }

    fn load_internal() -> Result<Self> {
        let ui = UiConfig::load()?;
        let database = DatabaseConfig::load()?;
        let certificate = CertificateConfig::load()?;

        Ok(Self {
            ui,
            database,
            certificate,
        })
    }
}

impl UiConfig {
    fn load() -> Result<Self> {
        let port = env::var("UI_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("failed to parse UI_PORT: invalid format")?;

        let dist_dir = env::var("UI_DIST_DIR")
            .unwrap_or_else(|_| "ui/dist".to_string())
            .into();

        Ok(Self { port, dist_dir })
    }
}

impl DatabaseConfig {
    fn load() -> Result<Self> {
        let address = env::var("DATABASE_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:1433".to_string());
        let timeout =
            env::var("DATABASE_CONNECT_TIMEOUT_SECS").unwrap_or_else(|_| "20".to_string());

        Self::parse(&address, &timeout)
    }

    fn parse(address: &str, timeout_secs: &str) -> Result<Self> {
        let (host, port) = address
            .rsplit_once(':')
            .context("failed to parse DATABASE_ADDRESS: expected <host>:<port>")?;
        anyhow::ensure!(
            !host.is_empty(),
            "failed to parse DATABASE_ADDRESS: empty host"
        );
        port.parse::<u16>()
            .context("failed to parse DATABASE_ADDRESS: invalid port")?;

        let timeout_secs = timeout_secs
            .parse::<u64>()
            .context("failed to parse DATABASE_CONNECT_TIMEOUT_SECS: invalid format")?;
        anyhow::ensure!(
            timeout_secs > 0,
            "failed to parse DATABASE_CONNECT_TIMEOUT_SECS: must be positive"
        );

        Ok(Self {
            address: address.to_string(),
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl CertificateConfig {
    fn load() -> Result<Option<Self>> {
        Self::from_paths(env::var("CERT_PATH").ok(), env::var("KEY_PATH").ok())
    }

    fn from_paths(cert_path: Option<String>, key_path: Option<String>) -> Result<Option<Self>> {
        match (cert_path, key_path) {
            (Some(cert_path), Some(key_path)) => Ok(Some(Self {
                cert_path: cert_path.into(),
                key_path: key_path.into(),
            })),
            (None, None) => Ok(None),
            _ => anyhow::bail!("CERT_PATH and KEY_PATH must be set together"),
        }
    }
}
