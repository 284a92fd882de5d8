//! Authentication states and the screens each one may reach.
//!
//! Checks here are client-side only; the server holds no matching
//! authorization boundary.

use zenflow_core::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    AuthenticatedUser,
    AuthenticatedManager,
}

impl AuthState {
    pub fn of(user: Option<&User>) -> Self {
        match user {
            None => Self::Unauthenticated,
            Some(u) if u.is_manager => Self::AuthenticatedManager,
            Some(_) => Self::AuthenticatedUser,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    ManagerLogin,
    /// Register screen: pick today's level and add notes.
    Home,
    History,
    Tips,
    ManagerDashboard,
}

impl Route {
    /// Screen opened at app start.
    pub fn start(state: AuthState) -> Self {
        match state {
            AuthState::Unauthenticated => Self::Login,
            AuthState::AuthenticatedUser => Self::Home,
            AuthState::AuthenticatedManager => Self::ManagerDashboard,
        }
    }

    pub fn is_manager_only(self) -> bool {
        matches!(self, Self::ManagerDashboard)
    }

    pub fn is_user_only(self) -> bool {
        matches!(self, Self::Home | Self::History | Self::Tips)
    }

    /// The route actually shown when `self` is requested in `state`.
    ///
    /// Manager screens send everyone else to the manager login. User
    /// screens send anonymous visitors to the regular login and managers
    /// back to their dashboard.
    pub fn guard(self, state: AuthState) -> Self {
        match (self, state) {
            (r, AuthState::AuthenticatedManager) if r.is_user_only() => Self::ManagerDashboard,
            (r, AuthState::Unauthenticated) if r.is_user_only() => Self::Login,
            (r, AuthState::AuthenticatedUser | AuthState::Unauthenticated) if r.is_manager_only() => {
                Self::ManagerLogin
            }
            (r, _) => r,
        }
    }
}
