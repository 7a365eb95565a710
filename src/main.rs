use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use tickbox::auth::{AuthGuard, TokenService};
use tickbox::config::Config;
use tickbox::routes;
use tickbox::store::{TodoStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // Missing JWT_SECRET panics here, before the server binds.
    let config = Config::from_env();

    let tokens = web::Data::new(TokenService::new(
        &config.jwt_secret,
        config.token_ttl_hours,
    ));
    let users = web::Data::new(UserStore::new());
    let todos = web::Data::new(TodoStore::new());

    log::info!("starting tickbox server at {}", config.server_url());

    let cors_origin = config.cors_origin.clone();
    let bind_addr = (config.server_host.clone(), config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(tokens.clone())
            .app_data(users.clone())
            .app_data(todos.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&cors_origin)
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(
                web::scope("/api/v1")
                    .wrap(AuthGuard)
                    .configure(routes::config),
            )
            .default_service(web::route().to(routes::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
