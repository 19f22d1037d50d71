use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// Deadline applied to every persistence call made by a request
    pub query_timeout: Duration,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Fallback filter used when RUST_LOG is not set
    pub level: String,
    pub console_enabled: bool,
    pub console_json: bool,
    pub file_enabled: bool,
    pub file_json: bool,
    pub directory: String,
    pub filename: String,
    pub rotation: LogRotation,
    /// Rolled files kept next to the active one
    pub max_backups: usize,
    /// Days a rolled file is kept
    pub max_age_days: usize,
}

/// How often the log file is rolled over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Minutely,
    Hourly,
    Daily,
    Never,
}

impl std::str::FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minutely" => Ok(Self::Minutely),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "LOG_ROTATION must be one of minutely, hourly, daily, never (got '{}')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            log: LogConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

/// Read an environment variable, falling back to `default` when it is unset.
fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(key: &str, default: bool) -> Result<bool, String> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(format!("{} must be a boolean (true/false)", key)),
        },
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 8080;
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MiB

    pub fn from_env() -> Result<Self, String> {
        let env = var_or("APP_ENV", "production");
        let host = var_or("HOST", "127.0.0.1");

        // PORT wins over the legacy API_PORT name
        let port = match env::var("PORT").or_else(|_| env::var("API_PORT")) {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT: {}", e))?,
            Err(_) => Self::DEFAULT_PORT,
        };

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = var_or("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size =
            parse_var("MAX_REQUEST_BODY_SIZE", Self::DEFAULT_MAX_REQUEST_BODY_SIZE)?;

        Ok(Self {
            env,
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes
    const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let url = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => Self::url_from_parts(
                &var_or("DB_USERNAME", "postgres"),
                &var_or("DB_PASSWORD", "password"),
                &var_or("DB_HOST", "localhost"),
                &var_or("DB_PORT", "5432"),
                &var_or("DB_DATABASE", "microservice_sekolah"),
            ),
        };

        let query_timeout_secs =
            parse_var("DB_QUERY_TIMEOUT_SECS", Self::DEFAULT_QUERY_TIMEOUT_SECS)?;
        if query_timeout_secs == 0 {
            return Err("DB_QUERY_TIMEOUT_SECS must be greater than zero".to_string());
        }

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_var("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
            query_timeout: Duration::from_secs(query_timeout_secs),
            run_migrations: parse_bool("DB_RUN_MIGRATIONS", true)?,
        })
    }

    fn url_from_parts(user: &str, password: &str, host: &str, port: &str, database: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            user, password, host, port, database
        )
    }

    /// Connection target without credentials, safe to log
    pub fn redacted_target(&self) -> String {
        self.url
            .split('@')
            .next_back()
            .unwrap_or("***")
            .to_string()
    }
}

impl LogConfig {
    const DEFAULT_MAX_BACKUPS: usize = 5;
    const DEFAULT_MAX_AGE_DAYS: usize = 30;

    pub fn from_env() -> Result<Self, String> {
        let filename = var_or("LOG_FILENAME", "app.log");
        if filename.trim().is_empty() {
            return Err("LOG_FILENAME must not be empty".to_string());
        }

        Ok(Self {
            level: var_or("LOG_LEVEL", "info"),
            console_enabled: parse_bool("LOG_CONSOLE_ENABLED", true)?,
            console_json: parse_bool("LOG_CONSOLE_JSON", false)?,
            file_enabled: parse_bool("LOG_FILE_ENABLED", false)?,
            file_json: parse_bool("LOG_FILE_JSON", false)?,
            directory: var_or("LOG_DIRECTORY", "log"),
            filename,
            rotation: var_or("LOG_ROTATION", "daily").parse()?,
            max_backups: parse_var("LOG_MAX_BACKUPS", Self::DEFAULT_MAX_BACKUPS)?,
            max_age_days: parse_var("LOG_MAX_AGE", Self::DEFAULT_MAX_AGE_DAYS)?,
        })
    }

    /// Number of log files the rolling appender may keep, the active one included.
    ///
    /// Both the backup count and the age limit cap it; `None` when the file is
    /// never rolled.
    pub fn retained_files(&self) -> Option<usize> {
        let files_per_day = match self.rotation {
            LogRotation::Minutely => 24 * 60,
            LogRotation::Hourly => 24,
            LogRotation::Daily => 1,
            LogRotation::Never => return None,
        };

        let by_count = self.max_backups + 1;
        let by_age = self.max_age_days.saturating_mul(files_per_day).max(1);
        Some(by_count.min(by_age))
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = var_or("SWAGGER_TITLE", "Sekolah API");
        let version = var_or("SWAGGER_VERSION", "0.1.0");
        let description = var_or("SWAGGER_DESCRIPTION", "API documentation for Sekolah service");

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
