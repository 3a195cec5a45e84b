use sea_orm::DatabaseTransaction;

pub mod favorite_service;
pub mod person_service;
pub mod planet_service;
pub mod user_service;

/// Rolls back after a failed write. A failing rollback is only logged; the
/// original error is what the caller reports.
pub(crate) async fn rollback(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        tracing::warn!(error = %err, "transaction rollback failed");
    }
}
