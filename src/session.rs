//! Client-held session state: auth token, role, and username.
//!
//! Persisted to browser localStorage so a reload keeps the user signed in,
//! and mirrored into a reactive context so views and route guards never read
//! storage ad hoc. The role flag gates UI only; the backend re-checks
//! authorization on every protected endpoint.

use leptos::prelude::*;

const TOKEN_KEY: &str = "user_token";
const ROLE_KEY: &str = "user_role";
const USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Anything other than the literal "admin" tag is a regular user.
    pub fn parse(tag: &str) -> Role {
        if tag == "admin" {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub username: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Reactive handle to the current session, provided at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> SessionContext {
        let (session, set_session) = signal(load_session());
        SessionContext { session, set_session }
    }

    pub fn use_context() -> SessionContext {
        expect_context::<SessionContext>()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.get().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.get().is_some_and(|s| s.is_admin())
    }

    pub fn username(&self) -> Option<String> {
        self.session.get().map(|s| s.username)
    }

    pub fn token(&self) -> Option<String> {
        self.session.get().map(|s| s.token)
    }

    /// Persist a fresh session (login) and publish it to the view tree.
    pub fn log_in(&self, session: Session) {
        save_session(&session);
        self.set_session.set(Some(session));
    }

    /// Drop the stored session (logout).
    pub fn log_out(&self) {
        clear_session();
        self.set_session.set(None);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a persisted session back from localStorage, if all keys are present.
pub fn load_session() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let role = storage.get_item(ROLE_KEY).ok().flatten()?;
    let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
    Some(Session {
        token,
        role: Role::parse(&role),
        username,
    })
}

fn save_session(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(ROLE_KEY, session.role.as_str());
        let _ = storage.set_item(USERNAME_KEY, &session.username);
    }
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_admin_tag() {
        assert_eq!(Role::parse("admin"), Role::Admin);
    }

    #[test]
    fn test_role_parse_defaults_to_user() {
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
        assert_eq!(Role::parse("Admin"), Role::User, "role tag comparison is exact");
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse(Role::Admin.as_str()), Role::Admin);
        assert_eq!(Role::parse(Role::User.as_str()), Role::User);
    }

    #[test]
    fn test_is_admin() {
        let admin = Session {
            token: "t".to_string(),
            role: Role::Admin,
            username: "root".to_string(),
        };
        assert!(admin.is_admin());
        let user = Session { role: Role::User, ..admin };
        assert!(!user.is_admin());
    }
}
