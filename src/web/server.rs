use std::net::SocketAddr;

use axum::Router;
use tracing::info;

use crate::web::handler::{record_visit, AppState};

/// Inbound HTTP server. Every path is a visit; there are no other routes.
pub struct VisitServer {
    state: AppState,
    bind_addr: String,
}

impl VisitServer {
    pub fn new(state: AppState, bind_addr: String) -> Self {
        Self { state, bind_addr }
    }

    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = Router::new()
            .fallback(record_visit)
            .with_state(self.state.clone());

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;
        info!("Visit server listening on {}", self.bind_addr);
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;

        Ok(())
    }
}
