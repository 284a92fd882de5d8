//! Scripted backend and fixtures shared by the controller tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use zenflow_api::{ApiRequest, ApiResponse, HttpBackend, RecordClient, TransportFailure, UserClient};
use zenflow_app::session::SessionContext;
use zenflow_core::models::User;
use zenflow_storage::{MemoryStore, SessionStore};

pub enum Reply {
    Json(u16, Value),
    Empty(u16),
    Unreachable,
    /// Never answers.
    Hang,
}

/// Answers requests from a script, in order, and records what was sent.
#[derive(Default)]
pub struct FakeBackend {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A backend that fails the test on any request.
    pub fn silent() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpBackend for FakeBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportFailure> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Json(status, body)) => Ok(ApiResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            }),
            Some(Reply::Empty(status)) => Ok(ApiResponse {
                status,
                body: Vec::new(),
            }),
            Some(Reply::Unreachable) => {
                Err(TransportFailure::NoResponse("connection refused".to_string()))
            }
            Some(Reply::Hang) => std::future::pending().await,
            None => panic!("unscripted request to {path}"),
        }
    }
}

pub fn record_client(backend: &Arc<FakeBackend>, supports_update: bool) -> RecordClient {
    RecordClient::new(backend.clone(), supports_update)
}

pub fn user_client(backend: &Arc<FakeBackend>) -> UserClient {
    UserClient::new(backend.clone())
}

pub fn user_json(id: i64, is_manager: bool) -> Value {
    json!({
        "id": id,
        "nomeCompleto": "Ana Souza",
        "email": "ana@zenflow.app",
        "dataNascimento": "1990-05-10T00:00:00",
        "cpf": "123.456.789-00",
        "isGestor": is_manager,
        "ativo": true,
        "dataCriacao": "2024-01-15T12:00:00"
    })
}

pub fn user(id: i64, is_manager: bool) -> User {
    serde_json::from_value(user_json(id, is_manager)).unwrap()
}

pub fn record_json(id: i64, owner_id: i64, level: i32, notes: Option<&str>) -> Value {
    json!({
        "id": id,
        "usuarioId": owner_id,
        "usuarioNome": "Ana Souza",
        "nivelEstresse": level,
        "observacoes": notes,
        "data": "2024-05-02T08:30:00"
    })
}

/// A fresh in-memory session, optionally already signed in as `user`.
pub fn session(user: Option<&User>) -> (SessionContext, Arc<MemoryStore>) {
    let memory = Arc::new(MemoryStore::new());
    let store = SessionStore::new(memory.clone());
    if let Some(user) = user {
        store.save(user).unwrap();
    }
    (SessionContext::init(store), memory)
}
