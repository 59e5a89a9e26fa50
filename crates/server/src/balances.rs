use api_types::balance::Balances;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState, transactions::to_decimal};

/// Signed amount summed per account.
pub async fn get_balances(State(state): State<ServerState>) -> Result<Json<Balances>, ServerError> {
    let balances = state.engine.balances().await?;
    Ok(Json(
        balances
            .into_iter()
            .map(|(account, total)| (account, to_decimal(total)))
            .collect(),
    ))
}
