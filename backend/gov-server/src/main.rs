use gov_server::{AppState, build_router, logger, seed_admin};

use gov_auth::{LoginRateLimiter, PasswordHasher, RateLimitConfig, TokenSettings};
use gov_config::Config;

use std::error::Error;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;

/// How often idle login limiter keys are dropped
const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration; any error here is fatal
    let config = Config::load()?;
    config.validate()?;

    let config_dir = Config::config_dir()?;
    let log_file_path = logger::resolve_log_file(&config.logging, &config_dir)?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gov-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (migrations run on open)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = gov_db::open_pool(&database_path, config.database.max_connections).await?;
    info!("Database ready, migrations applied");

    // Credential and token machinery, built once
    let token_settings = TokenSettings {
        secret: config
            .auth
            .jwt_secret
            .clone()
            .unwrap_or_default()
            .into_bytes(),
        issuer: config.auth.issuer.clone(),
        audience: config.auth.audience.clone(),
        validity: config.auth.token_validity(),
        clock_skew: config.auth.clock_skew(),
    };
    let password_hasher = PasswordHasher::new(config.auth.hash_iterations)?;
    let login_limiter = LoginRateLimiter::new(RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window_secs: config.rate_limit.window_secs,
    });

    match seed_admin(&pool, &password_hasher, &config.admin).await? {
        gov_server::SeedOutcome::Disabled => info!("Administrator seeding disabled"),
        outcome => info!("Administrator seeding: {:?}", outcome),
    }

    let app_state = AppState::new(
        pool,
        &token_settings,
        password_hasher,
        login_limiter.clone(),
        config.auth.password_min_length,
    )?;
    info!("JWT: HS256 issuer and verifier initialized");

    // Keep the login limiter's key map bounded
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            login_limiter.prune();
            log::debug!(
                "Login limiter pruned, {} keys tracked",
                login_limiter.tracked_keys()
            );
        }
    });

    let app = build_router(app_state).layer(ConcurrencyLimitLayer::new(
        config.server.max_connections,
    ));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
