use yew::prelude::*;
use yewdux::prelude::*;

use crate::{SessionState, State, get_api_client};

/// Hook to look up the signed-in user on startup
#[hook]
pub fn use_session() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            match api_client.current_session().await {
                Ok(identity) => {
                    tracing::debug!(email = %identity.email, "signed in");
                    dispatch.reduce_mut(|state| {
                        state.session = SessionState::SignedIn(identity);
                    });
                }
                Err(e) => {
                    // A 401 and an unreachable backend both leave us
                    // without an identity to scope requests by
                    tracing::warn!("no session: {e}");
                    dispatch.reduce_mut(|state| state.sign_out());
                }
            }
        });
    });
}
