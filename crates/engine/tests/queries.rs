use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use sea_orm::Database;

use engine::{
    Cashflow, CreateTransactionCmd, DateBucket, Engine, MoneyCents, Transaction,
    TransactionListFilter,
};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

async fn record(
    engine: &Engine,
    account: &str,
    cents: i64,
    description: &str,
    datetime: DateTime<Utc>,
) -> Transaction {
    let cashflow = if cents < 0 {
        Cashflow::Expense
    } else {
        Cashflow::Income
    };
    engine
        .create_transaction(CreateTransactionCmd {
            amount: MoneyCents::new(cents),
            cashflow,
            description: description.to_string(),
            category: "general".to_string(),
            account: account.to_string(),
            datetime,
        })
        .await
        .unwrap()
}

async fn list_in(engine: &Engine, now: DateTime<Utc>, date: DateBucket) -> Vec<Transaction> {
    let filter = TransactionListFilter {
        date: Some(date),
        ..Default::default()
    };
    engine.list_transactions(&filter, now).await.unwrap()
}

fn descriptions(txs: &[Transaction]) -> Vec<&str> {
    txs.iter().map(|tx| tx.description.as_str()).collect()
}

#[tokio::test]
async fn balances_sum_per_account() {
    let engine = engine_with_db().await;
    let now = Utc::now();
    record(&engine, "A", 5_000, "one", now).await;
    record(&engine, "A", -2_000, "two", now).await;
    record(&engine, "B", 1_000, "three", now).await;

    let balances = engine.balances().await.unwrap();
    assert_eq!(
        balances,
        BTreeMap::from([
            ("A".to_string(), MoneyCents::new(3_000)),
            ("B".to_string(), MoneyCents::new(1_000)),
        ])
    );
}

#[tokio::test]
async fn balances_include_mirror_entries() {
    let engine = engine_with_db().await;
    assert!(engine.balances().await.unwrap().is_empty());

    record(&engine, "ahorros", 10_000, "saving", Utc::now()).await;
    let balances = engine.balances().await.unwrap();
    assert_eq!(balances["ahorros"], MoneyCents::new(10_000));
    assert_eq!(balances["tarjeta"], MoneyCents::new(-10_000));
}

#[tokio::test]
async fn list_is_newest_first() {
    let engine = engine_with_db().await;
    let now = Utc::now();
    record(&engine, "tarjeta", -100, "middle", now - Duration::days(2)).await;
    record(&engine, "tarjeta", -100, "newest", now - Duration::days(1)).await;
    record(&engine, "tarjeta", -100, "oldest", now - Duration::days(3)).await;

    let txs = engine
        .list_transactions(&TransactionListFilter::default(), now)
        .await
        .unwrap();
    assert_eq!(descriptions(&txs), ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn date_buckets_are_relative_to_now() {
    let engine = engine_with_db().await;
    let now = Utc::now();
    record(&engine, "tarjeta", -100, "today", now).await;
    record(&engine, "tarjeta", -100, "ten days ago", now - Duration::days(10)).await;
    record(&engine, "tarjeta", -100, "forty days ago", now - Duration::days(40)).await;

    assert_eq!(descriptions(&list_in(&engine, now, DateBucket::Week).await), ["today"]);
    assert_eq!(
        descriptions(&list_in(&engine, now, DateBucket::Month).await),
        ["today", "ten days ago"]
    );
    assert_eq!(list_in(&engine, now, DateBucket::Year).await.len(), 3);
    assert_eq!(list_in(&engine, now, DateBucket::All).await.len(), 3);
}

#[tokio::test]
async fn explicit_bounds_are_exclusive() {
    let engine = engine_with_db().await;
    let now = Utc::now();
    let early = now - Duration::days(5);
    let mid = now - Duration::days(3);
    let late = now - Duration::days(1);
    record(&engine, "tarjeta", -100, "early", early).await;
    record(&engine, "tarjeta", -100, "mid", mid).await;
    record(&engine, "tarjeta", -100, "late", late).await;

    let filter = TransactionListFilter {
        after: Some(early),
        before: Some(late),
        ..Default::default()
    };
    let txs = engine.list_transactions(&filter, now).await.unwrap();
    assert_eq!(descriptions(&txs), ["mid"]);

    let filter = TransactionListFilter {
        before: Some(mid),
        ..Default::default()
    };
    let txs = engine.list_transactions(&filter, now).await.unwrap();
    assert_eq!(descriptions(&txs), ["early"]);
}

#[tokio::test]
async fn amount_and_text_filters_combine() {
    let engine = engine_with_db().await;
    let now = Utc::now();
    record(&engine, "tarjeta", -1_500, "Lunch downtown", now).await;
    record(&engine, "tarjeta", -9_000, "lunch party", now).await;
    record(&engine, "efectivo", 2_000, "Sold bike", now).await;

    let filter = TransactionListFilter {
        description: Some("LUNCH".to_string()),
        ..Default::default()
    };
    assert_eq!(engine.list_transactions(&filter, now).await.unwrap().len(), 2);

    let filter = TransactionListFilter {
        description: Some("lunch".to_string()),
        min_amount: Some(MoneyCents::new(-2_000)),
        ..Default::default()
    };
    let txs = engine.list_transactions(&filter, now).await.unwrap();
    assert_eq!(descriptions(&txs), ["Lunch downtown"]);

    let filter = TransactionListFilter {
        max_amount: Some(MoneyCents::new(0)),
        account: Some("TARJ".to_string()),
        ..Default::default()
    };
    assert_eq!(engine.list_transactions(&filter, now).await.unwrap().len(), 2);

    let filter = TransactionListFilter {
        category: Some("  ".to_string()),
        ..Default::default()
    };
    assert_eq!(engine.list_transactions(&filter, now).await.unwrap().len(), 3);
}

#[tokio::test]
async fn text_filters_match_wildcard_characters_literally() {
    let engine = engine_with_db().await;
    let now = Utc::now();
    record(&engine, "tarjeta", -1_000, "rent", now).await;
    record(&engine, "tarjeta", -2_000, "50% off", now).await;
    record(&engine, "tarjeta", -3_000, "a_b", now).await;
    record(&engine, "tarjeta", -4_000, "sale!", now).await;

    for (needle, expected) in [("%", "50% off"), ("_", "a_b"), ("!", "sale!"), ("A_B", "a_b")] {
        let filter = TransactionListFilter {
            description: Some(needle.to_string()),
            ..Default::default()
        };
        let txs = engine.list_transactions(&filter, now).await.unwrap();
        assert_eq!(descriptions(&txs), [expected], "needle {needle:?}");
    }
}

#[tokio::test]
async fn skip_then_limit_page_through_results() {
    let engine = engine_with_db().await;
    let now = Utc::now();
    for day in 1..=5 {
        record(
            &engine,
            "tarjeta",
            -100,
            &format!("day {day}"),
            now - Duration::days(day),
        )
        .await;
    }

    let page = |skip, limit| TransactionListFilter {
        skip,
        limit,
        ..Default::default()
    };

    let txs = engine.list_transactions(&page(Some(1), Some(2)), now).await.unwrap();
    assert_eq!(descriptions(&txs), ["day 2", "day 3"]);

    let txs = engine.list_transactions(&page(Some(3), None), now).await.unwrap();
    assert_eq!(descriptions(&txs), ["day 4", "day 5"]);

    let txs = engine.list_transactions(&page(None, Some(1)), now).await.unwrap();
    assert_eq!(descriptions(&txs), ["day 1"]);

    let txs = engine.list_transactions(&page(None, Some(0)), now).await.unwrap();
    assert!(txs.is_empty());
}
