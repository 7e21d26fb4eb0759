//! Trivia backend entry-point: configuration, migrations, and server startup.

mod server;

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::QuestionRepository;
use backend::outbound::persistence::{
    DbPool, DieselQuestionRepository, PoolConfig, run_pending_migrations,
};
use backend::seed::seed_starter_question;
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()?;
    let mut config = ServerConfig::new(settings.bind_addr());

    match settings.database_url() {
        Some(database_url) => {
            run_pending_migrations(&database_url)?;
            let pool = DbPool::connect(
                PoolConfig::new(&database_url).with_max_size(settings.pool_max_size()),
            )
            .await?;

            if settings.seed_on_start {
                let questions: Arc<dyn QuestionRepository> =
                    Arc::new(DieselQuestionRepository::new(pool.clone()));
                let outcome = seed_starter_question(&questions).await?;
                info!(?outcome, "startup seeding finished");
            }

            config = config.with_db_pool(pool);
        }
        None => {
            warn!("no database URL configured; serving from an in-memory store");
        }
    }

    info!(addr = %config.bind_addr(), "starting trivia server");
    create_server(config)?.await?;
    Ok(())
}
