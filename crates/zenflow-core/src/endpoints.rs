//! REST path conventions.
//!
//! Pure string functions. Every path is relative to the configured API base
//! URL and follows the canonical owner-scoped backend layout.

pub const LOGIN: &str = "Usuario/login";

pub const USERS: &str = "Usuario";

pub fn user(id: i64) -> String {
    format!("Usuario/{id}")
}

pub const RECORDS: &str = "Registro";

pub fn records_by_owner(owner_id: i64) -> String {
    format!("Registro/usuario/{owner_id}")
}

/// Path addressing one record on behalf of its owner (update and delete).
pub fn owned_record(id: i64, owner_id: i64) -> String {
    format!("Registro/{id}/usuario/{owner_id}")
}
