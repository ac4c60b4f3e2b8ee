//! Request handler definitions
//!
//! Handlers here must stay thin and leave the real work to the engine. Any long, non-cpu-bound
//! operation (all the store I/O) is awaited so worker threads keep serving other requests.

use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::*;
use order_bridge_engine::{OrderProcessorApi, OrderProcessorError, RecordStore, ShopifyOrder};

use crate::data_objects::JsonResponse;

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Webhook  ----------------------------------------------------

/// Order-creation webhook. The heavy lifting happens in [`OrderProcessorApi`]; this handler only
/// translates the pipeline outcome into an HTTP response. Any failure, mapping or store alike,
/// is a 500 with a JSON body; partially written orders are not reported separately.
pub async fn orders_create_webhook<B>(
    req: HttpRequest,
    body: web::Json<ShopifyOrder>,
    api: web::Data<OrderProcessorApi<B>>,
) -> HttpResponse
where
    B: RecordStore + 'static,
{
    trace!("🛍️ Received webhook request: {}", req.uri());
    let order = body.into_inner();
    match api.process_order(order).await {
        Ok(summary) => {
            info!(
                "🛍️ Order {} bridged successfully. {} line item records written.",
                summary.order_id, summary.line_items_written
            );
            HttpResponse::Ok().json(JsonResponse::success(format!("Order {} processed.", summary.order_id)))
        },
        Err(OrderProcessorError::MappingError(e)) => {
            warn!("🛍️ Could not map the incoming order. {e}");
            HttpResponse::InternalServerError().json(JsonResponse::failure(e))
        },
        Err(OrderProcessorError::StoreError(e)) => {
            warn!("🛍️ The record store rejected a write. {e}");
            HttpResponse::InternalServerError().json(JsonResponse::failure(e))
        },
    }
}
