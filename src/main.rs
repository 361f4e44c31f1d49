use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use actix_web_httpauth::middleware::HttpAuthentication;
use env_logger::Env;
use std::io;

mod auth;
mod auth_handlers;
mod config;
mod db;
mod employee_handlers;
mod errors;
mod models;


use auth::TokenService;
use config::Config;
use db::{EmployeeStore, UserStore};

/// Simple health check
#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "JWT_SECRET must be set to a non-empty value",
        )
    })?;

    let token_service = web::Data::new(TokenService::new(&config.jwt_secret));
    let user_store = web::Data::new(UserStore::default());
    let employee_store = web::Data::new(EmployeeStore::default());

    let addr = config.bind_address;
    log::info!("Listening on: {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(token_service.clone())
            .app_data(user_store.clone())
            .app_data(employee_store.clone())
            .service(health)
            .service(
                web::scope("/auth")
                    .service(auth_handlers::login)
                    .service(auth_handlers::register),
            )
            .service(
                web::scope("/employees")
                    .wrap(HttpAuthentication::bearer(auth::validator))
                    .service(employee_handlers::get_employees)
                    .service(employee_handlers::get_employee)
                    .service(employee_handlers::create_employee)
                    .service(employee_handlers::update_employee)
                    .service(employee_handlers::delete_employee),
            )
    })
    .bind(addr)?
    .run()
    .await
}
