use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub upload_dir: String,
    pub db_max_connections: u32,
}

fn parse_pool_size(raw: Option<String>) -> Result<u32> {
    match raw {
        Some(value) => value
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a positive integer"),
        None => Ok(5),
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());

        let db_max_connections = parse_pool_size(std::env::var("DB_MAX_CONNECTIONS").ok())?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            upload_dir,
            db_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_defaults_to_five() {
        assert_eq!(parse_pool_size(None).unwrap(), 5);
    }

    #[test]
    fn pool_size_is_read_when_set() {
        assert_eq!(parse_pool_size(Some("12".to_string())).unwrap(), 12);
    }

    #[test]
    fn non_numeric_pool_size_is_rejected() {
        assert!(parse_pool_size(Some("lots".to_string())).is_err());
    }
}
