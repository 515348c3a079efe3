use listing::{Notice, Notifier, Severity};
use std::collections::VecDeque;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Toasts on screen at once. Adding another drops the oldest.
pub const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Warning,
    Success,
    Info,
}

impl ToastType {
    /// Milliseconds before the toast dismisses itself. Errors linger so
    /// they can be read.
    pub fn default_duration(self) -> u32 {
        match self {
            Self::Error => 8_000,
            Self::Warning => 6_000,
            Self::Success | Self::Info => 4_000,
        }
    }
}

impl From<Severity> for ToastType {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Info,
            Severity::Warning => Self::Warning,
            Severity::Error => Self::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub toast_type: ToastType,
    /// `None` keeps the toast until it is closed.
    pub duration: Option<u32>,
}

impl Toast {
    pub fn new(title: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            toast_type,
            duration: Some(toast_type.default_duration()),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Same text and kind, ignoring identity.
    fn repeats(&self, other: &Toast) -> bool {
        self.toast_type == other.toast_type
            && self.title == other.title
            && self.description == other.description
    }
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        Toast::new(notice.title, notice.severity.into())
            .with_description(notice.description)
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: VecDeque<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            // Several lists failing the same way would otherwise stack
            // identical toasts
            ToastAction::Add(toast)
                if toasts.iter().any(|shown| shown.repeats(&toast)) =>
            {
                return self;
            }
            ToastAction::Add(toast) => {
                toasts.push_back(toast);
                while toasts.len() > MAX_VISIBLE {
                    toasts.pop_front();
                }
            }
            ToastAction::Remove(id) => toasts.retain(|toast| toast.id != id),
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;

        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, title: impl Into<String>) {
        self.add(Toast::new(title, ToastType::Error));
    }

    pub fn success(&self, title: impl Into<String>) {
        self.add(Toast::new(title, ToastType::Success));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

/// Controller notices surface as toasts.
impl Notifier for ToastHandle {
    fn notify(&self, notice: Notice) {
        self.add(notice.into());
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: Rc<ToastState>, toast: Toast) -> Rc<ToastState> {
        state.reduce(ToastAction::Add(toast))
    }

    #[test]
    fn notices_keep_their_severity_and_description() {
        let toast = Toast::from(Notice {
            severity: Severity::Warning,
            title: "Failed to load data".into(),
            description: Some("Request failed with status code 500".into()),
        });
        assert_eq!(toast.toast_type, ToastType::Warning);
        assert_eq!(toast.duration, Some(6_000));
        assert_eq!(
            toast.description.as_deref(),
            Some("Request failed with status code 500")
        );
    }

    #[test]
    fn repeated_toasts_are_shown_once() {
        let state = Rc::new(ToastState::default());
        let state = add(state, Toast::new("Network error", ToastType::Error));
        let state = add(state, Toast::new("Network error", ToastType::Error));
        let state = add(state, Toast::new("Network error", ToastType::Info));
        assert_eq!(state.toasts.len(), 2);
    }

    #[test]
    fn oldest_toast_makes_room() {
        let mut state = Rc::new(ToastState::default());
        for n in 0..=MAX_VISIBLE {
            state = add(state, Toast::new(format!("toast {n}"), ToastType::Info));
        }
        assert_eq!(state.toasts.len(), MAX_VISIBLE);
        assert_eq!(state.toasts[0].title, "toast 1");

        let newest = state.toasts[MAX_VISIBLE - 1].id;
        let state = state.reduce(ToastAction::Remove(newest));
        assert!(state.toasts.iter().all(|toast| toast.id != newest));
    }
}
