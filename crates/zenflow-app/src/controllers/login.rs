use tracing::warn;
use zenflow_api::UserClient;
use zenflow_core::models::{LoginRequest, User};

use crate::error::AppError;
use crate::navigation::Route;
use crate::scope::{ScopeHandle, ScreenScope};
use crate::session::SessionContext;

/// Regular and manager login screens.
pub struct LoginController {
    users: UserClient,
    scope: ScreenScope,
}

impl LoginController {
    pub fn new(users: UserClient) -> Self {
        Self {
            users,
            scope: ScreenScope::new(),
        }
    }

    pub fn scope(&self) -> ScopeHandle {
        self.scope.handle()
    }

    /// Log in through the regular screen. Manager accounts are turned away
    /// before anything is written to the session.
    pub async fn login(
        &self,
        session: &mut SessionContext,
        email: &str,
        password: &str,
    ) -> Result<Route, AppError> {
        let user = self.authenticate(email, password).await?;
        if user.is_manager {
            warn!(user_id = user.id, "manager account used the regular login");
            return Err(AppError::ManagerAccount);
        }
        session.sign_in(user)?;
        Ok(Route::Home)
    }

    pub async fn manager_login(
        &self,
        session: &mut SessionContext,
        email: &str,
        password: &str,
    ) -> Result<Route, AppError> {
        let user = self.authenticate(email, password).await?;
        if !user.is_manager {
            warn!(user_id = user.id, "regular account used the manager login");
            return Err(AppError::NotManager);
        }
        session.sign_in(user)?;
        Ok(Route::ManagerDashboard)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Please fill in email and password."));
        }
        let credentials = LoginRequest::new(email, password);
        let user = self.scope.run(self.users.login(&credentials)).await??;
        Ok(user)
    }
}
