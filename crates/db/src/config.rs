use sqlx::postgres::PgConnectOptions;

/// Database connection parameters loaded from environment variables.
///
/// All fields have defaults suitable for a local PostgreSQL; in production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database host (default: `localhost`).
    pub host: String,
    /// Database port (default: `5432`).
    pub port: u16,
    /// Database user (default: `postgres`).
    pub user: String,
    /// Database name (default: `catalog`).
    pub database: String,
    /// Database password (default: empty).
    pub password: String,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default     |
    /// |---------------|-------------|
    /// | `DB_HOST`     | `localhost` |
    /// | `DB_PORT`     | `5432`      |
    /// | `DB_USER`     | `postgres`  |
    /// | `DB_NAME`     | `catalog`   |
    /// | `DB_PASSWORD` | *(empty)*   |
    pub fn from_env() -> Self {
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());

        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
        let database = std::env::var("DB_NAME").unwrap_or_else(|_| "catalog".into());
        let password = std::env::var("DB_PASSWORD").unwrap_or_default();

        Self {
            host,
            port,
            user,
            database,
            password,
        }
    }

    /// Build sqlx connect options from the individual parameters.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database)
            .password(&self.password)
    }
}
