use generalis_captions::CaptionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Shared secret unlocking the editing panel.
    pub admin_secret: String,
    /// Caption service connection settings.
    pub captions: CaptionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                      |
    /// |------------------------|----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                    |
    /// | `PORT`                 | `3000`                                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                         |
    /// | `ADMIN_SECRET`         | `1234`                                       |
    /// | `CAPTION_API_URL`      | `https://generativelanguage.googleapis.com`  |
    /// | `CAPTION_API_KEY`      | empty (caption calls resolve to fallbacks)   |
    /// | `CAPTION_MODEL`        | `gemini-2.5-flash`                           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_secret = std::env::var("ADMIN_SECRET").unwrap_or_else(|_| "1234".into());

        let captions = CaptionConfig {
            api_url: std::env::var("CAPTION_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            api_key: std::env::var("CAPTION_API_KEY").unwrap_or_default(),
            model: std::env::var("CAPTION_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_secret,
            captions,
        }
    }
}
