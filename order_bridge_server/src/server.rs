use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use airtable_tools::AirtableApi;
use order_bridge_engine::OrderProcessorApi;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{health, orders_create_webhook},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let store = AirtableApi::new(config.airtable.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, store)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, store: AirtableApi) -> Result<Server, ServerError> {
    let tables = config.tables.clone();
    let srv = HttpServer::new(move || {
        let processor = OrderProcessorApi::new(store.clone(), tables.clone());
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| ServerError::InvalidRequestBody(err.to_string()).into());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("ob::access_log"))
            .app_data(web::Data::new(processor))
            .app_data(json_config)
            .service(health)
            .service(web::resource("/webhook/orders_create").route(web::post().to(orders_create_webhook::<AirtableApi>)))
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
