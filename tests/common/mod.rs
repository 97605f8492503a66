use contactbook::configuration::{DatabaseSettings, GeminiSettings, Settings};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::env;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

/// Settings for a test run: local postgres, OS-assigned port, a dummy Gemini
/// credential. Tests that exercise the ask endpoint point `gemini.api_base`
/// at a wiremock server before spawning.
pub fn test_configuration() -> Settings {
    dotenvy::dotenv().ok();

    Settings {
        database: DatabaseSettings {
            username: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: env::var("DB_PASS").unwrap_or_else(|_| "postgres".to_string()),
            host: env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("DB_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(5432),
            database_name: "contactsdb".to_string(),
        },
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        gemini: GeminiSettings {
            api_key: "test-key".to_string(),
            model: "gemini-pro".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        },
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = contactbook::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

#[allow(dead_code)]
pub async fn spawn_app() -> Option<TestApp> {
    spawn_app_with_configuration(test_configuration()).await
}
