use std::env;

/// Configuration settings, loaded once at startup.
pub struct Config {
    pub bind_address: String,
    pub jwt_secret: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `JWT_SECRET` must be present and non-empty; without it every issued
    /// token would be unverifiable, so the server refuses to start.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(env::VarError::NotPresent);
        }

        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());

        Ok(Config {
            bind_address: format!("0.0.0.0:{}", port),
            jwt_secret,
        })
    }
}
