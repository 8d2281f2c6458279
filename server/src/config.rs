// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::fmt;

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Database connection target and credentials
  pub db_user: String,
  pub db_pass: String,
  pub db_host: String,
  pub db_port: u16,
  pub db_name: String,
  pub db_max_connections: u32,
}

impl AppConfig {
  /// Loads configuration once at startup. Missing credentials are a startup error.
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let server_port = get_env("PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

    let db_user = get_env("DB_USER")?;
    let db_pass = get_env("DB_PASS")?;
    if db_user.is_empty() || db_pass.is_empty() {
      return Err(AppError::Config("DB_USER and DB_PASS must not be empty".to_string()));
    }

    let db_host = get_env("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let db_port = get_env("DB_PORT")
      .unwrap_or_else(|_| "5432".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid DB_PORT: {}", e)))?;
    let db_name = get_env("DB_NAME").unwrap_or_else(|_| "outlet".to_string());
    let db_max_connections = get_env("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|_| "5".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;

    let config = Self {
      server_host,
      server_port,
      db_user,
      db_pass,
      db_host,
      db_port,
      db_name,
      db_max_connections,
    };
    tracing::info!(config = ?config, "Application configuration loaded successfully.");
    Ok(config)
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }

  /// Connection options built field by field, so the password never needs URL escaping.
  pub fn connect_options(&self) -> PgConnectOptions {
    PgConnectOptions::new()
      .host(&self.db_host)
      .port(self.db_port)
      .username(&self.db_user)
      .password(&self.db_pass)
      .database(&self.db_name)
  }
}

impl fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("db_user", &self.db_user)
      .field("db_pass", &"[REDACTED]")
      .field("db_host", &self.db_host)
      .field("db_port", &self.db_port)
      .field("db_name", &self.db_name)
      .field("db_max_connections", &self.db_max_connections)
      .finish()
  }
}
