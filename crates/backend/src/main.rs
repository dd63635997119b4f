pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let static_dir = shared::config::get_static_dir(&config);
    tracing::info!("Serving frontend from {}", static_dir.display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let state = shared::state::AppState::seeded(config.listing);
    let app = routes::configure_routes(state, &static_dir).layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
