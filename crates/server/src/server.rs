use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{balances, transactions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/transactions/create", post(transactions::create))
        .route(
            "/transactions/list",
            get(transactions::list)
                .post(transactions::create)
                .delete(transactions::delete_list),
        )
        .route(
            "/transactions/delete-all",
            axum::routing::delete(transactions::delete_all),
        )
        .route("/transactions/balances", get(balances::get_balances))
        .route(
            "/transactions/{id}",
            get(transactions::get)
                .patch(transactions::update)
                .delete(transactions::delete),
        )
        .with_state(state)
}

/// Builds the HTTP application around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
