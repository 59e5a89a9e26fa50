//! Transactions API endpoints

use api_types::transaction::{
    Detail, TransactionListQuery, TransactionNew, TransactionUpdate, TransactionView,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Utc;
use engine::{
    Cashflow, CreateTransactionCmd, DateBucket, MoneyCents, Transaction, TransactionListFilter,
    UpdateTransactionCmd,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

/// Converts a wire decimal into cents, rejecting more than two decimals.
pub(crate) fn to_money(amount: Decimal) -> Result<MoneyCents, ServerError> {
    Ok(amount.to_string().parse::<MoneyCents>()?)
}

pub(crate) fn to_decimal(amount: MoneyCents) -> Decimal {
    Decimal::new(amount.cents(), 2)
}

fn to_view(tx: Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        amount: to_decimal(tx.amount),
        description: tx.description,
        category: tx.category,
        account: tx.account,
        datetime: tx.datetime.fixed_offset(),
        mirror_of: tx.mirror_of,
    }
}

/// Blank or unrecognised `date` values apply no date filter.
fn to_filter(query: TransactionListQuery) -> Result<TransactionListFilter, ServerError> {
    let date = query
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| match s.parse::<DateBucket>() {
            Ok(bucket) => Some(bucket),
            Err(err) => {
                tracing::debug!("ignoring date filter: {err}");
                None
            }
        });

    Ok(TransactionListFilter {
        min_amount: query.min_amount.map(to_money).transpose()?,
        max_amount: query.max_amount.map(to_money).transpose()?,
        description: query.description,
        category: query.category,
        account: query.account,
        date,
        before: query.before_datetime.map(|dt| dt.with_timezone(&Utc)),
        after: query.after_datetime.map(|dt| dt.with_timezone(&Utc)),
        skip: query.skip,
        limit: query.limit,
    })
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let Json(payload) = payload?;
    let cashflow = Cashflow::required(payload.cashflow.as_deref())?;

    let tx = state
        .engine
        .create_transaction(CreateTransactionCmd {
            amount: to_money(payload.amount)?,
            cashflow,
            description: payload.description,
            category: payload.category,
            account: payload.account,
            datetime: payload.datetime.with_timezone(&Utc),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(to_view(tx))))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TransactionView>, ServerError> {
    let Path(id) = id?;
    let tx = state.engine.transaction(id).await?;
    Ok(Json(to_view(tx)))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TransactionUpdate>, JsonRejection>,
) -> Result<Json<TransactionView>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let tx = state
        .engine
        .update_transaction(UpdateTransactionCmd {
            transaction_id: id,
            amount: payload.amount.map(to_money).transpose()?,
            description: payload.description,
            category: payload.category,
            account: payload.account,
            datetime: payload.datetime.map(|dt| dt.with_timezone(&Utc)),
        })
        .await?;

    Ok(Json(to_view(tx)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_transaction(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<TransactionListQuery>, QueryRejection>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let Query(query) = query?;
    let filter = to_filter(query)?;
    let txs = state.engine.list_transactions(&filter, Utc::now()).await?;
    Ok(Json(txs.into_iter().map(to_view).collect()))
}

pub async fn delete_list(
    State(state): State<ServerState>,
) -> Result<(StatusCode, Json<Detail>), ServerError> {
    state.engine.delete_all_transactions().await?;
    Ok((
        StatusCode::NO_CONTENT,
        Json(Detail {
            detail: "All transactions deleted.".to_string(),
        }),
    ))
}

pub async fn delete_all(
    State(state): State<ServerState>,
) -> Result<(StatusCode, Json<Detail>), ServerError> {
    let deleted = state.engine.delete_all_transactions().await?;
    Ok((
        StatusCode::NO_CONTENT,
        Json(Detail {
            detail: format!("Deleted {deleted} transactions."),
        }),
    ))
}
