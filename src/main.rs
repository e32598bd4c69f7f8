//! Blog Press - a blog publishing server.
//!
//! This binary starts the HTTP server and wires up all components.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use blog_press::{
    blog::BlogService,
    config::Config,
    media::DiskMediaStore,
    server::{create_router, RouterConfig},
    session::{MemorySessionResolver, User},
    store::MemoryBlogStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Blog Press v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Session cookie: {}", config.session_cookie);
    info!("  Upload directory: {}", config.upload_dir);
    info!(
        "  Body limit: {:.1}MB",
        config.body_limit as f64 / (1024.0 * 1024.0)
    );

    // Build collaborators
    let resolver = MemorySessionResolver::new();
    let store = MemoryBlogStore::new();
    let media = DiskMediaStore::new(&config.upload_dir);

    // Seed a dev session if configured
    if let Some(ref token) = config.seed_token {
        warn!("  Seed token configured - a 'dev' session is pre-registered");
        warn!("        Do not use --seed-token in production");
        resolver
            .insert(
                token,
                User {
                    id: Uuid::new_v4(),
                    username: "dev".to_string(),
                },
            )
            .await;
    } else {
        info!("  No seed token - mutations require an externally registered session");
    }

    // Build the service and router
    let service = BlogService::new(resolver, store, media);
    let router_config = build_router_config(&config);
    let router = create_router(service, router_config);

    // Bind and serve
    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl http://{}/blogs", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "blog_press=debug,tower_http=debug"
    } else {
        "blog_press=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config = RouterConfig::new(&config.session_cookie)
        .with_body_limit(config.body_limit)
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}
