use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use evhub_api::{build_router, AppState};
use evhub_core::repositories::Repositories;
use evhub_core::services::UserService;
use evhub_infrastructure::{create_pool, in_memory_repositories, postgres_repositories, run_migrations};
use evhub_security::JwtService;
use evhub_shared::config::AppConfig;
use evhub_shared::constants::MEMORY_DATABASE_URL;
use evhub_shared::telemetry::init_telemetry;
use evhub_shared::utils::mask_email;

#[derive(Parser)]
#[command(name = "evhub-server")]
#[command(about = "Event Hub REST backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Create a user with the staff and superuser flags
    CreateSuperuser {
        email: String,
        #[arg(env = "EVHUB_SUPERUSER_PASSWORD")]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry; the guard flushes the log writer on exit
    let _guard = init_telemetry(&config.log)?;
    info!("{} starting ({})", config.app.name, config.app.env);

    let command = cli.command.unwrap_or(Commands::Serve);
    let repos = connect(&config, matches!(command, Commands::Migrate)).await?;
    let jwt = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry));

    match command {
        Commands::Serve => serve(&config, repos, jwt).await?,
        Commands::Migrate => info!("Migrations complete"),
        Commands::CreateSuperuser { email, password } => {
            let users = UserService::new(repos.users, jwt);
            let user = users.create_superuser(&email, &password).await?;
            info!("Superuser {} created with id {}", mask_email(&user.email), user.id);
        }
    }

    Ok(())
}

async fn connect(config: &AppConfig, force_migrations: bool) -> anyhow::Result<Repositories> {
    if config.database.url == MEMORY_DATABASE_URL {
        if config.is_production() {
            anyhow::bail!("the in-memory store is not allowed in production");
        }
        warn!("Using the in-memory store; data is lost on exit");
        return Ok(in_memory_repositories());
    }

    info!("Connecting to database...");
    let pool = create_pool(&config.database).await?;
    info!("Database connection established.");

    if config.database.run_migrations || force_migrations {
        run_migrations(&pool).await?;
    }

    Ok(postgres_repositories(pool))
}

async fn serve(config: &AppConfig, repos: Repositories, jwt: Arc<JwtService>) -> anyhow::Result<()> {
    let app = build_router(AppState::new(repos, jwt));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
