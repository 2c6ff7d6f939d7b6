//! Account registration, login, lookup, and deletion.

use chrono::Utc;
use rusqlite::Connection;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::repository::account as account_repo;
use crate::models::{Account, AccountType, AccountView};
use crate::service::{credential, require, Field, ServiceError};

/// Registration/login body as the front end posts it. Absent fields
/// deserialize to empty strings and fail validation, matching clients
/// that omit them entirely.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountPayload {
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Lookup/delete body: `{email}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountFilter {
    pub email: String,
}

fn build_account(dto: &AccountPayload, account_type: AccountType) -> Account {
    let stored = credential::hash_password(&dto.password);
    Account {
        id: Uuid::new_v4(),
        email: dto.email.trim().to_string(),
        password_salt: stored.salt,
        password_hash: stored.hash,
        account_type,
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        created_at: Utc::now(),
    }
}

fn insert_unique(conn: &Connection, account: &Account) -> Result<(), ServiceError> {
    if account_repo::email_exists(conn, &account.email)? {
        return Err(ServiceError::DuplicateAccount);
    }
    account_repo::insert_account(conn, account)?;
    Ok(())
}

/// Register a patient or doctor account from the public sign-up form.
pub fn create_account(conn: &Connection, dto: &AccountPayload) -> Result<(), ServiceError> {
    require(&dto.email, Field::Email)?;
    require(&dto.password, Field::Password)?;
    require(&dto.account_type, Field::AccountType)?;

    let account_type: AccountType = dto.account_type.parse().map_err(ServiceError::Database)?;
    insert_unique(conn, &build_account(dto, account_type))
}

/// Register an admin account. The role is fixed regardless of any
/// `type` value in the payload.
pub fn create_admin(conn: &Connection, dto: &AccountPayload) -> Result<(), ServiceError> {
    require(&dto.email, Field::Email)?;
    require(&dto.password, Field::Password)?;

    insert_unique(conn, &build_account(dto, AccountType::Admin))
}

/// Credential check. Unknown email is an error; a known email with the
/// wrong password is a plain `false`, which the handler maps to 403.
pub fn login(conn: &Connection, dto: &AccountPayload) -> Result<bool, ServiceError> {
    require(&dto.email, Field::Email)?;
    require(&dto.password, Field::Password)?;

    let account = account_repo::find_by_email(conn, dto.email.trim())?
        .ok_or(ServiceError::NoSuchAccount)?;

    Ok(credential::verify_password(
        &dto.password,
        &account.password_salt,
        &account.password_hash,
    ))
}

/// Admin login: same as [`login`] but a non-admin account is rejected
/// before the credential result is revealed.
pub fn login_admin(conn: &Connection, dto: &AccountPayload) -> Result<bool, ServiceError> {
    require(&dto.email, Field::Email)?;
    require(&dto.password, Field::Password)?;

    let account = account_repo::find_by_email(conn, dto.email.trim())?
        .ok_or(ServiceError::NoSuchAccount)?;

    if account.account_type != AccountType::Admin {
        return Err(ServiceError::NotAdmin);
    }

    Ok(credential::verify_password(
        &dto.password,
        &account.password_salt,
        &account.password_hash,
    ))
}

pub fn get_account(conn: &Connection, filter: &AccountFilter) -> Result<AccountView, ServiceError> {
    require(&filter.email, Field::Email)?;

    let account = account_repo::find_by_email(conn, filter.email.trim())?
        .ok_or(ServiceError::NoSuchAccount)?;
    Ok(account.view())
}

pub fn delete_account(conn: &Connection, filter: &AccountFilter) -> Result<(), ServiceError> {
    require(&filter.email, Field::Email)?;

    let deleted = account_repo::delete_by_email(conn, filter.email.trim())?;
    if deleted == 0 {
        return Err(ServiceError::NoSuchAccount);
    }
    Ok(())
}

pub fn patient_accounts(conn: &Connection) -> Result<Vec<AccountView>, ServiceError> {
    let accounts = account_repo::list_by_type(conn, AccountType::Patient)?;
    Ok(accounts.iter().map(Account::view).collect())
}

pub fn doctor_accounts(conn: &Connection) -> Result<Vec<AccountView>, ServiceError> {
    let accounts = account_repo::list_by_type(conn, AccountType::Doctor)?;
    Ok(accounts.iter().map(Account::view).collect())
}
