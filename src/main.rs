use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use scrimbook_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    error::AppError,
    external::DataDragonClient,
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // One-time catalog bootstrap; a failure leaves an empty catalog but does
    // not stop the server
    let catalog_client = DataDragonClient::new(config.data_dragon.clone());
    let seed_service = SeedService::new(pool.clone(), catalog_client);
    if let Err(e) = seed_service.seed_champions_if_empty().await {
        log::error!("Champion catalog seed failed: {e:?}");
    }

    let champion_service = ChampionService::new(pool.clone());
    let draft_service = DraftService::new(pool.clone());
    let scrim_service = ScrimService::new(pool.clone());
    let player_service = PlayerService::new(pool.clone());
    let synergy_service = SynergyService::new(pool.clone());
    let patch_note_service = PatchNoteService::new(pool.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
            )
            .app_data(web::Data::new(champion_service.clone()))
            .app_data(web::Data::new(draft_service.clone()))
            .app_data(web::Data::new(scrim_service.clone()))
            .app_data(web::Data::new(player_service.clone()))
            .app_data(web::Data::new(synergy_service.clone()))
            .app_data(web::Data::new(patch_note_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api")
                    .configure(handlers::champion_config)
                    .configure(handlers::draft_config)
                    .configure(handlers::scrim_config)
                    .configure(handlers::player_config)
                    .configure(handlers::availability_config)
                    .configure(handlers::synergy_config)
                    .configure(handlers::patchnote_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
