use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::{Account, AccountType};

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    let type_str: String = row.get(4)?;
    let account_type: AccountType = type_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Account {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        email: row.get(1)?,
        password_salt: row.get(2)?,
        password_hash: row.get(3)?,
        account_type,
        first_name: row.get(5)?,
        last_name: row.get(6)?,
        created_at: row.get(7)?,
    })
}

const ACCOUNT_COLUMNS: &str =
    "id, email, password_salt, password_hash, account_type, first_name, last_name, created_at";

pub fn insert_account(conn: &Connection, account: &Account) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO accounts (id, email, password_salt, password_hash, account_type,
                               first_name, last_name, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            account.id.to_string(),
            account.email,
            account.password_salt,
            account.password_hash,
            account.account_type.as_str(),
            account.first_name,
            account.last_name,
            account.created_at,
        ],
    )?;
    Ok(())
}

pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<Account>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = ?1 LIMIT 1"
    ))?;

    match stmt.query_row(params![email], account_from_row) {
        Ok(account) => Ok(Some(account)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_by_id(conn: &Connection, id: &str) -> Result<Option<Account>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ?1 LIMIT 1"
    ))?;

    match stmt.query_row(params![id], account_from_row) {
        Ok(account) => Ok(Some(account)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn email_exists(conn: &Connection, email: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM accounts WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Delete by email; returns the number of rows removed.
pub fn delete_by_email(conn: &Connection, email: &str) -> Result<usize, DatabaseError> {
    let deleted = conn.execute("DELETE FROM accounts WHERE email = ?1", params![email])?;
    Ok(deleted)
}

pub fn list_by_type(
    conn: &Connection,
    account_type: AccountType,
) -> Result<Vec<Account>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE account_type = ?1 ORDER BY created_at"
    ))?;

    let rows = stmt.query_map(params![account_type.as_str()], account_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
