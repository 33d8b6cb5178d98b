use sea_orm::{DbErr, TransactionError};
use std::error::Error;

/// Collapses sea-orm's two-layer transaction error into the caller's own
/// error type, so workflow code can stay on a single `Result` alias.
pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

pub trait RequireRecord<T> {
    fn require(self) -> Result<T, DbErr>;
}

impl<T> RequireRecord<T> for Result<Option<T>, DbErr> {
    fn require(self) -> Result<T, DbErr> {
        self?.ok_or_else(|| DbErr::RecordNotFound("record not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_res_unwraps_both_layers() {
        let connection: Result<(), TransactionError<DbErr>> =
            Err(TransactionError::Connection(DbErr::Custom("gone".to_string())));
        assert!(matches!(connection.flatten_res(), Err(DbErr::Custom(_))));

        let transaction: Result<(), TransactionError<DbErr>> =
            Err(TransactionError::Transaction(DbErr::Custom("rolled back".to_string())));
        assert!(matches!(transaction.flatten_res(), Err(DbErr::Custom(_))));

        let ok: Result<i32, TransactionError<DbErr>> = Ok(7);
        assert_eq!(Ok(7), ok.flatten_res());
    }

    #[test]
    fn test_require_turns_none_into_not_found() {
        let missing: Result<Option<i32>, DbErr> = Ok(None);
        assert!(matches!(missing.require(), Err(DbErr::RecordNotFound(_))));

        let present: Result<Option<i32>, DbErr> = Ok(Some(7));
        assert_eq!(Ok(7), present.require());
    }
}
