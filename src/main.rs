mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod repository;
mod service;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use crate::config::AppConfig;
use crate::repository::{EmployeeRepository, InMemoryEmployeeRepository, PgEmployeeRepository};
use crate::service::employee::EmployeeService;

async fn build_repository(config: &AppConfig) -> io::Result<Arc<dyn EmployeeRepository>> {
    match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url, config.max_connections)
                .await
                .map_err(|err| io::Error::other(format!("Failed to connect to the database: {}", err)))?;
            db::init_schema(&pool)
                .await
                .map_err(|err| io::Error::other(format!("Failed to create schema: {}", err)))?;
            info!("Using PostgreSQL employee store");
            Ok(Arc::new(PgEmployeeRepository::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set, employees are kept in memory only");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let repository = build_repository(&config).await?;
    let service = web::Data::new(EmployeeService::new(repository));

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(handlers::employee::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
