//! Account Management Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Account;
use crate::db::repository::AccountRepository;
use crate::utils::AppResult;

/// List all accounts (password hash never serialized)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Account>>> {
    let repo = AccountRepository::new(state.get_db());
    let accounts = repo.find_all().await?;
    Ok(Json(accounts))
}
