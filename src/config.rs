use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
    pub max_body_size: usize,
    pub log_level: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            cors_allowed_origins: Vec::new(),
            max_body_size: 1_048_576,
            log_level: "info".to_string(),
            environment: Environment::Development,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(get: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = var_or("FORMS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMS_HOST: {e}"))?;

        let port: u16 = var_or("FORMS_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid FORMS_PORT: {e}"))?;

        let cors_allowed_origins = parse_origins(&var_or("FORMS_CORS_ALLOWED_ORIGINS", ""));

        let max_body_size: usize = var_or("FORMS_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FORMS_MAX_BODY_SIZE: {e}"))?;

        let log_level = var_or("FORMS_LOG_LEVEL", "info");

        let environment = match var_or("FORMS_ENVIRONMENT", "development")
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            "development" => Environment::Development,
            other => return Err(format!("Invalid FORMS_ENVIRONMENT: {other}")),
        };

        Ok(Config {
            host,
            port,
            cors_allowed_origins,
            max_body_size,
            log_level,
            environment,
        })
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}
