use std::future::Future;
use std::time::Duration;

pub mod item;
pub mod user;

pub use item::PostgresItemRepository;
pub use user::PostgresUserRepository;

/// Bound a store call by `timeout`. An elapsed timer is reported as a pool timeout.
pub(crate) async fn bounded<T>(
    timeout: Duration,
    query: impl Future<Output = Result<T, sqlx::Error>>,
) -> Result<T, sqlx::Error> {
    tokio::time::timeout(timeout, query)
        .await
        .unwrap_or(Err(sqlx::Error::PoolTimedOut))
}

/// Whether the store could not be reached, as opposed to rejecting the query.
pub(crate) fn is_unavailable(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
    )
}
