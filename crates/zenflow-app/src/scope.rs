//! Cancellation lifetime of one screen.
//!
//! Network calls made by a controller run inside its [`ScreenScope`]. Once the
//! scope is closed (explicitly, through a [`ScopeHandle`], or by dropping the
//! controller) any pending call resolves to [`AppError::Cancelled`] and its
//! result is never applied to screen state.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::AppError;

pub struct ScreenScope {
    closed: Arc<watch::Sender<bool>>,
}

/// Cloneable remote control for closing a scope from another task.
#[derive(Clone)]
pub struct ScopeHandle {
    closed: Arc<watch::Sender<bool>>,
}

impl ScopeHandle {
    pub fn close(&self) {
        self.closed.send_replace(true);
    }
}

impl ScreenScope {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            closed: Arc::new(tx),
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            closed: Arc::clone(&self.closed),
        }
    }

    pub fn close(&self) {
        self.closed.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Drive `fut` unless the scope closes first.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, AppError> {
        let rx = self.closed.subscribe();
        if *rx.borrow() {
            return Err(AppError::Cancelled);
        }
        tokio::select! {
            output = fut => {
                if self.is_closed() {
                    Err(AppError::Cancelled)
                } else {
                    Ok(output)
                }
            }
            () = wait_closed(rx) => Err(AppError::Cancelled),
        }
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.closed.send_replace(true);
    }
}

async fn wait_closed(mut rx: watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}
