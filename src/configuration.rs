use std::env;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_host: String,
    pub app_port: u16,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }

    pub fn from_env() -> Result<Self, config::ConfigError> {
        let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|_| config::ConfigError::Message(format!("invalid DB_PORT: {}", port)))?;

        Ok(DatabaseSettings {
            username: env::var("DB_USER").unwrap_or_else(|_| "webappuser".to_string()),
            password: env::var("DB_PASS").unwrap_or_else(|_| "webapppass".to_string()),
            host: env::var("DB_HOST").unwrap_or_else(|_| "postgres".to_string()),
            port,
            database_name: env::var("DB_NAME").unwrap_or_else(|_| "contactsdb".to_string()),
        })
    }
}

impl GeminiSettings {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let api_key = env::var("API_KEY")
            .map_err(|_| config::ConfigError::NotFound("API_KEY".to_string()))?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());
        let api_base = env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        Ok(GeminiSettings {
            api_key,
            model,
            api_base,
        })
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let app_host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let app_port = env::var("APP_PORT").unwrap_or_else(|_| "8080".to_string());
    let app_port = app_port
        .parse::<u16>()
        .map_err(|_| config::ConfigError::Message(format!("invalid APP_PORT: {}", app_port)))?;

    Ok(Settings {
        database: DatabaseSettings::from_env()?,
        app_host,
        app_port,
        gemini: GeminiSettings::from_env()?,
    })
}
