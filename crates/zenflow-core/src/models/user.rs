use std::fmt;

use serde::{Deserialize, Serialize};

use super::timestamp;

/// An account as returned by the backend. `is_manager` is the only flag that
/// decides which screens a session may reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: String,
    #[serde(rename = "cpf", default)]
    pub national_id: String,
    #[serde(rename = "isGestor", default)]
    pub is_manager: bool,
    #[serde(rename = "ativo", default = "active_by_default")]
    pub active: bool,
    #[serde(rename = "dataCriacao", with = "timestamp")]
    pub created_at: jiff::Timestamp,
    #[serde(
        rename = "dataAtualizacao",
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub updated_at: Option<jiff::Timestamp>,
}

fn active_by_default() -> bool {
    true
}

impl User {
    /// First word of the full name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or_default()
    }
}

/// Credentials posted to the login endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}
