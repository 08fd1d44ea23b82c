use users_core::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Listener configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `USERS_API_HOST` (optional, defaults to `0.0.0.0`)
    /// - `USERS_API_PORT` (optional, defaults to 3000)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("USERS_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("USERS_API_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => {
                let parsed: u16 = raw.trim().parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid USERS_API_PORT '{raw}': must be an integer between 1 and 65535"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::ConfigError(
                        "USERS_API_PORT must be at least 1".into(),
                    ));
                }
                parsed
            }
        };

        Ok(Self { host, port })
    }

    /// Socket address string for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
