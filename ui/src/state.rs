use payloads::SessionIdentity;
use yewdux::prelude::*;

/// Who is signed in, as reported by the backend.
#[derive(Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    SignedOut,
    SignedIn(SessionIdentity),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // Managed by use_session. Pages receive the identity as a prop rather
    // than reading it from here.
    pub session: SessionState,
}

impl State {
    pub fn identity(&self) -> Option<&SessionIdentity> {
        match &self.session {
            SessionState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn sign_out(&mut self) {
        self.session = SessionState::SignedOut;
    }
}
