//! Backend entry-point: configuration, migrations, and server start-up.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{self, ServerConfig};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

fn parse_bind_addr() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    raw.parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR {raw}: {e}")))
}

/// Apply pending schema migrations over a blocking connection.
async fn run_migrations(database_url: String) -> std::io::Result<()> {
    tokio::task::spawn_blocking(move || {
        let mut conn = diesel::PgConnection::establish(&database_url)
            .map_err(|e| std::io::Error::other(format!("database connection failed: {e}")))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        Ok(())
    })
    .await
    .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = load_session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);
    let bind_addr = parse_bind_addr()?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);

    if let Ok(database_url) = env::var("DATABASE_URL") {
        run_migrations(database_url.clone()).await?;
        let pool = DbPool::build(PoolConfig::new(database_url))
            .await
            .map_err(|e| std::io::Error::other(format!("pool construction failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    info!(addr = %config.bind_addr(), "starting recipe catalog server");
    server::run(config)?.await
}
