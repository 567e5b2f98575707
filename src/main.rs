//! ScoreSweep API server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{http::header, web, App, HttpRequest, HttpServer, Result as ActixResult};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use scoresweep::api;
use scoresweep::api::cleanup::RetentionDays;
use scoresweep::api::upload::MaxUploadSize;
use scoresweep::auth::AdminKey;
use scoresweep::config::Config;
use scoresweep::db::DbPool;
use scoresweep::middleware::RequestLogger;
use scoresweep::migration::Migrator;
use scoresweep::services::cleanup::{start_cleanup_task, CleanupConfig};
use scoresweep::services::{Analyzer, Storage};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// SPA fallback handler - serves index.html for client-side routing.
async fn spa_fallback(req: HttpRequest) -> ActixResult<NamedFile> {
    let static_dir: &PathBuf = req
        .app_data::<web::Data<PathBuf>>()
        .expect("Static dir not configured")
        .get_ref();
    Ok(NamedFile::open(static_dir.join("index.html"))?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL, SWEEP_JWT_SECRET and S3 credentials must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  ScoreSweep API Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }
    if config.auth.demo_mode {
        warn!("Demo mode enabled: all requests run as the demo user");
    }

    // Initialize database and run migrations
    let pool = DbPool::connect(&config)
        .await
        .expect("Failed to connect to database");
    info!("Database connection established");

    Migrator::up(pool.connection(), None)
        .await
        .expect("Failed to run migrations");
    info!("Database migrations complete");

    // Initialize S3 storage
    let storage = Storage::new(&config.s3)
        .await
        .expect("Failed to initialize S3 storage");

    // Initialize the report analyzer
    let analyzer = Analyzer::new(&config.llm).expect("Failed to initialize analyzer");
    if config.llm.api_key.is_some() {
        info!("LLM analysis enabled (model: {})", config.llm.model);
    } else {
        info!("No LLM API key configured: analysis uses the mock payload");
    }

    // Start the cleanup background task
    let cleanup_config = CleanupConfig {
        retention_days: config.retention_days,
        interval_secs: if config.is_development() { 60 } else { 3600 }, // 1 min dev, 1 hour prod
    };
    start_cleanup_task(pool.clone(), storage.clone(), cleanup_config);
    info!(
        "Cleanup service started (report retention: {} days)",
        config.retention_days
    );

    // Prepare shared state
    let bind_address = config.bind_address();
    let admin_key = AdminKey::new(config.admin_key.clone());
    let auth_config = config.auth.clone();
    let max_upload_size = config.max_upload_size;
    let retention_days = config.retention_days;
    let static_dir = config.static_dir.clone();
    let is_development = config.is_development();

    if static_dir.is_some() {
        info!("Static file serving enabled from {:?}", static_dir);
    }

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    // Start HTTP server
    let server = HttpServer::new(move || {
        // Configure CORS
        let cors = if is_development {
            // Permissive CORS for the Vite dev server
            Cors::default()
                .allowed_origin("http://localhost:5173")
                .allowed_origin("http://127.0.0.1:5173")
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                    "X-Admin-Key".parse().unwrap(),
                ])
                .max_age(3600)
        } else {
            // Restrictive CORS for production (same-origin only)
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::CONTENT_TYPE,
                    "X-Admin-Key".parse().unwrap(),
                ])
                .max_age(3600)
        };

        let mut app = App::new()
            // Add CORS middleware (must be before other middleware)
            .wrap(cors)
            // Add request logging middleware
            .wrap(RequestLogger)
            // Add shared state
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(analyzer.clone()))
            .app_data(web::Data::new(admin_key.clone()))
            .app_data(web::Data::new(auth_config.clone()))
            .app_data(web::Data::new(MaxUploadSize(max_upload_size)))
            .app_data(web::Data::new(RetentionDays(retention_days)))
            // Allow 2x max_upload_size at the HTTP layer - the real limit is
            // enforced while streaming the multipart body
            .app_data(web::PayloadConfig::new(max_upload_size * 2))
            // Configure API routes
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_upload_routes)
                    .configure(api::configure_process_routes)
                    .configure(api::configure_report_routes)
                    .configure(api::configure_dispute_routes)
                    .configure(api::configure_agency_routes)
                    .configure(api::configure_cleanup_routes),
            )
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            );

        // Serve static files in production (when SWEEP_STATIC_DIR is set)
        if let Some(ref dir) = static_dir {
            app = app
                .app_data(web::Data::new(dir.clone()))
                // Serve static assets (js, css, images)
                .service(Files::new("/assets", dir.join("assets")).prefer_utf8(true))
                // Legacy wizard deep links collapsed into the dashboard
                .service(web::redirect("/dashboard/upload", "/dashboard"))
                .service(web::redirect("/dashboard/review", "/dashboard"))
                .service(web::redirect("/dashboard/generate", "/dashboard"))
                // SPA fallback - serve index.html for all other routes
                .default_service(web::route().to(spa_fallback));
        }

        app
    });

    // Set worker count
    server
        .workers(worker_count)
        .bind(&bind_address)?
        .run()
        .await
}
