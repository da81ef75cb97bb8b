/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string. Profiles are kept in memory when unset.
    pub database_url: Option<String>,
    /// Insert the demo profile at startup when it is missing (default: `true`).
    pub seed_demo_users: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            cors_origins: vec!["http://localhost:5173".into()],
            request_timeout_secs: 30,
            database_url: None,
            seed_demo_users: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | unset (in-memory store)    |
    /// | `SEED_DEMO_USERS`      | `true`                     |
    ///
    /// Panics on unparseable numeric values so misconfiguration fails at
    /// startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port: u16 = std::env::var("PORT")
            .map(|v| v.parse().expect("PORT must be a valid u16"))
            .unwrap_or(defaults.port);

        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or(defaults.cors_origins);

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse().expect("REQUEST_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.request_timeout_secs);

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let seed_demo_users = std::env::var("SEED_DEMO_USERS")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.seed_demo_users);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            seed_demo_users,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
