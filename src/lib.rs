//! Admin back office for the classes platform: normalizes the remote data
//! service payloads into stable view models and serves them as JSON.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::gateway::HttpGateway;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod normalize;
#[cfg(feature = "data")]
pub mod screen;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod gateway;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // The blocking client owns its own runtime and must be built off the async executor.
    let client_config = server_config.clone();
    let gateway = web::block(move || HttpGateway::new(&client_config))
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to spawn client setup: {e}")))?
        .map_err(|e| {
            std::io::Error::other(format!("Failed to build the remote service client: {e}"))
        })?;
    let gateway = web::Data::new(gateway);

    log::info!(
        "Serving the admin API on {}:{} for {}",
        server_config.address,
        server_config.port,
        server_config.api_base_url
    );

    let bind_address = (server_config.address.clone(), server_config.port);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(gateway.clone())
            .app_data(server_config.clone())
            .configure(routes::configure::<HttpGateway>)
    })
    .bind(bind_address)?
    .run()
    .await
}
