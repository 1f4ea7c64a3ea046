//! Server setup and initialization
//!
//! Wires repositories, the translation worker, the notification publisher,
//! and the user event consumer around the Axum application.

use std::sync::Arc;

use axum::Router;
use debate_common::{AppConfig, AppError, JwtService};
use debate_core::{DomainError, NotificationPublisher, Translator};
use debate_db::{
    create_pool, run_migrations, PgCommentRepository, PgDebateRepository, PgReactionRepository,
    PgReplyRepository, PgTranslationRepository, PgUserRepository, PgVoteRepository,
};
use debate_events::{ConsumerConfig, DisabledPublisher, KafkaReplyPublisher, UserEventConsumer};
use debate_service::{
    CopyTranslator, HttpTranslator, ServiceContext, TranslationQueue, TranslationWorker,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Also starts the translation worker; it stops once the state is dropped.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = debate_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let (translation_queue, jobs) = TranslationQueue::new(
        config.translation.queue_capacity,
        config.translation.languages.clone(),
    );

    let publisher: Arc<dyn NotificationPublisher> = if config.kafka.enabled {
        let publisher = KafkaReplyPublisher::new(&config.kafka).map_err(DomainError::from)?;
        info!(topic = publisher.topic(), brokers = %config.kafka.brokers, "Kafka publisher ready");
        Arc::new(publisher)
    } else {
        warn!("Kafka disabled; reply notifications will not be published");
        Arc::new(DisabledPublisher)
    };

    let translator: Arc<dyn Translator> = match config.translation.api_url.as_deref() {
        Some(url) if config.translation.has_endpoint() => Arc::new(HttpTranslator::new(
            url,
            config.translation.api_key.clone(),
        )?),
        _ => {
            warn!("No translation endpoint configured; translations copy the source text");
            Arc::new(CopyTranslator)
        }
    };

    let service_context = ServiceContext::builder()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .debate_repo(Arc::new(PgDebateRepository::new(pool.clone())))
        .translation_repo(Arc::new(PgTranslationRepository::new(pool.clone())))
        .vote_repo(Arc::new(PgVoteRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .reply_repo(Arc::new(PgReplyRepository::new(pool.clone())))
        .publisher(publisher)
        .jwt_service(jwt_service)
        .translation_queue(translation_queue)
        .build()?;

    TranslationWorker::new(jobs, translator, service_context.translation_repo_handle()).spawn();

    Ok(AppState::new(service_context, config, pool))
}

/// Run the complete server with configuration
///
/// Serves until ctrl-c, then stops the user event consumer.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let kafka = config.kafka.clone();

    let state = create_app_state(config).await?;

    let consumer = kafka.enabled.then(|| {
        info!(brokers = %kafka.brokers, group_id = %kafka.group_id, "Starting user event consumer");
        UserEventConsumer::new(ConsumerConfig::from(&kafka), state.service_context_handle()).spawn()
    });

    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    if let Some(consumer) = consumer {
        if let Err(e) = consumer.shutdown().await {
            warn!(error = %e, "User event consumer did not stop cleanly");
        }
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
