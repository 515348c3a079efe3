use payloads::SessionIdentity;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{SessionState, State};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Callback<SessionIdentity, Html>,
}

/// Renders its children with the signed-in identity, once it is known.
#[function_component]
pub fn SessionPageWrapper(props: &Props) -> Html {
    let (state, _) = use_store::<State>();

    match &state.session {
        SessionState::Unknown => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading session..."}</p>
            </div>
        },
        SessionState::SignedOut => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Please log in to view the dashboard."}
                </p>
            </div>
        },
        SessionState::SignedIn(identity) => props.children.emit(identity.clone()),
    }
}
