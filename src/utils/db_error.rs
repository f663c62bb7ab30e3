//! Classification of `sqlx` errors.

/// Name of the unique constraint on `urls.alias`.
pub const ALIAS_UNIQUE_CONSTRAINT: &str = "urls_alias_key";

/// Returns `true` when `e` is a unique violation on the alias column.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_UNIQUE_CONSTRAINT))
}
