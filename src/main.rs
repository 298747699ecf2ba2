mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::services::PersonService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Seed the in-memory dataset once; it is shared read-only across workers
    let person_service = web::Data::new(PersonService::with_sample_data(CONFIG.dataset_size));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(person_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
