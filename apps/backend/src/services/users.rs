use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::claims::ClaimSet;
use crate::entities::{user_credentials, users};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::users as users_repo;
use crate::repos::users::CredentialsCreate;

/// A user together with the email they sign in with.
#[derive(Debug, Clone)]
pub struct Account {
    pub user: users::Model,
    pub email: String,
}

impl Account {
    /// Claims reflecting the account's current couple.
    pub fn claims(&self) -> ClaimSet {
        ClaimSet::new(self.user.id.clone(), self.email.clone())
            .with_group(self.user.couple_id.clone())
    }
}

/// Create a user and their credentials. Run inside `with_txn` so a
/// duplicate email leaves no orphan user behind.
pub async fn register<C: ConnectionTrait>(
    conn: &C,
    email: String,
    name: &str,
    password_hash: String,
) -> Result<Account, AppError> {
    let user = users_repo::create_user(conn, name).await?;
    let credentials = users_repo::create_credentials(
        conn,
        CredentialsCreate {
            user_id: user.id.clone(),
            email,
            password_hash,
        },
    )
    .await?;

    info!(user_id = %user.id, email = %Redacted(&credentials.email), "user registered");

    Ok(Account {
        user,
        email: credentials.email,
    })
}

/// Credentials for `email`. `None` must be rejected exactly like a wrong
/// password, including the cost of a verification.
pub async fn credentials_for_login<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<user_credentials::Model>, AppError> {
    Ok(users_repo::find_credentials_by_email(conn, email).await?)
}

/// Stamp `last_login` and load the account for a verified login.
pub async fn complete_login<C: ConnectionTrait>(
    conn: &C,
    credentials: user_credentials::Model,
) -> Result<Account, AppError> {
    let credentials = users_repo::record_login(conn, credentials).await?;
    let user = users_repo::require_user(conn, &credentials.user_id).await?;

    Ok(Account {
        user,
        email: credentials.email,
    })
}

/// The caller's account. Email and couple come from storage, not the token.
pub async fn load_account<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<Account, AppError> {
    let user = users_repo::require_user(conn, user_id).await?;
    let email = users_repo::find_credentials_by_user(conn, user_id)
        .await?
        .map(|c| c.email)
        .unwrap_or_default();

    Ok(Account { user, email })
}
