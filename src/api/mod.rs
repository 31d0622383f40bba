//! HTTP surface of the storefront, mounted under `/api`.

mod cart;
mod config;
mod error;
mod menu;
mod orders;
mod payments;

use std::io;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::app_system::{Config, StorefrontSystem};
use crate::clients::{CouponClient, OrderClient, ProductClient, SettingsClient};


/// Clients shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub coupons: CouponClient,
    pub settings: SettingsClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn from_system(system: &StorefrontSystem) -> Self {
        Self {
            products: system.product_client.clone(),
            coupons: system.coupon_client.clone(),
            settings: system.settings_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/config/public", get(config::public_config_handler))
        .route("/menu/categories", get(menu::categories_handler))
        .route("/menu/products", get(menu::products_handler))
        .route("/cart/validate-coupon", post(cart::validate_coupon_handler))
        .route("/orders", post(orders::create_order_handler))
        .route("/orders/", post(orders::create_order_handler))
        .route("/orders/:order_id", get(orders::get_order_handler))
        .route("/payments/providers", get(payments::providers_handler));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(root_handler))
        .route("/api/", get(root_handler))
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// Serves the API until Ctrl+C or SIGTERM.
///
/// The router's clients are dropped on return, so the system can be shut
/// down afterwards.
pub async fn serve(config: &Config, system: &StorefrontSystem) -> io::Result<()> {
    let app = router(AppState::from_system(system));

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
