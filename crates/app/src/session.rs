use dioxus::prelude::*;
use shared_types::{apply_login, apply_logout, AuthCallError, AuthResponse, PortalError, Session};

/// Application-wide session state, provided once at the root.
///
/// Views and the router only read it. The auth flows below are the only
/// writers: startup hydration, sign-in and sign-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
    /// Flash messages from the last auth call, shown on the login view.
    pub flashes: Signal<Vec<String>>,
    /// Set once the startup session check has finished (successfully or not)
    /// or a sign-in or sign-out has committed.
    pub hydrated: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::anonymous()),
            flashes: Signal::new(Vec::new()),
            hydrated: Signal::new(false),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().logged_in
    }

    /// Adopt whatever session the auth service already holds for this client.
    ///
    /// Ignored once a sign-in or sign-out has committed: that session is newer
    /// than whatever the startup check reports.
    pub fn hydrate(&mut self, outcome: Result<AuthResponse, AuthCallError>) {
        if *self.hydrated.peek() {
            tracing::debug!("session check superseded by a committed auth call");
            return;
        }
        match outcome {
            Ok(response) => {
                if let Some(user) = response.user_info {
                    tracing::info!(logged_in = user.logged_in, role = %user.user_type, "session restored");
                    self.session.set(user);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "session check failed, continuing anonymously");
            }
        }
        self.hydrated.set(true);
    }

    pub fn complete_login(
        &mut self,
        outcome: Result<AuthResponse, AuthCallError>,
    ) -> Result<(), PortalError> {
        let mut next = self.snapshot();
        let flashes = apply_login(&mut next, outcome)?;
        tracing::info!(role = %next.user_type, "signed in");
        self.commit(next, flashes);
        Ok(())
    }

    /// Clears the session only when the service confirmed the logout.
    pub fn complete_logout(
        &mut self,
        outcome: Result<AuthResponse, AuthCallError>,
    ) -> Result<(), PortalError> {
        let mut next = self.snapshot();
        let flashes = apply_logout(&mut next, outcome)?;
        tracing::info!("signed out");
        self.commit(next, flashes);
        Ok(())
    }

    fn commit(&mut self, session: Session, flashes: Vec<String>) {
        self.session.set(session);
        self.flashes.set(flashes);
        self.hydrated.set(true);
    }

    pub fn dismiss_flash(&mut self, index: usize) {
        let mut flashes = self.flashes.write();
        if index < flashes.len() {
            flashes.remove(index);
        }
    }
}

/// Hook to access the session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
