//! Session context and sign-in/sign-out helpers for the UI.
//!
//! [`SessionProvider`] restores the persisted session once on mount and shares
//! it as a `Signal<SessionState>`. The helpers only apply a transition to the
//! [`SessionStore`]. The provider watches the session and saves every change,
//! so a save outlives the screen that triggered it.

use std::path::PathBuf;

use dioxus::prelude::*;
use store::{AuthError, Session, SessionStore};

use crate::make_vault;

/// Authentication state shared through context.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub store: SessionStore,
    /// True until the persisted session has been read.
    pub loading: bool,
    /// Key the session is saved under.
    pub storage_key: String,
}

impl SessionState {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            store: SessionStore::new(),
            loading: true,
            storage_key: storage_key.into(),
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that restores, shares and saves the session.
/// Wrap your router with this component. `dir` is where the session file
/// lives; it defaults to [`crate::data_dir`].
#[component]
pub fn SessionProvider(
    #[props(default = crate::data_dir())]
    dir: PathBuf,
    children: Element,
) -> Element {
    let storage_key = try_use_context::<store::AppConfig>()
        .unwrap_or_default()
        .session
        .storage_key;
    let mut state = use_signal(|| SessionState::new(storage_key));
    // Last session read from or written to disk.
    let mut saved = use_signal(|| None::<Session>);
    let dir = use_hook(|| dir);

    let restore_dir = dir.clone();
    let _ = use_resource(move || {
        let dir = restore_dir.clone();
        async move {
            let key = state.peek().storage_key.clone();
            let session = make_vault(&dir, &key).load().await;
            tracing::info!(
                "Restored session (authenticated: {})",
                session.is_authenticated()
            );
            saved.set(Some(session.clone()));
            let mut current = state.write();
            current.store = SessionStore::restore(session);
            current.loading = false;
        }
    });

    use_effect(move || {
        let session = {
            let current = state.read();
            if current.loading {
                return;
            }
            current.store.session().clone()
        };
        if saved.peek().as_ref() == Some(&session) {
            return;
        }
        saved.set(Some(session.clone()));

        let dir = dir.clone();
        let key = state.peek().storage_key.clone();
        spawn(async move {
            make_vault(&dir, &key).save(&session).await;
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

pub fn sign_in(
    state: &mut Signal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    state.write().store.sign_in(email, password)?;
    Ok(())
}

pub fn sign_up(
    state: &mut Signal<SessionState>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    state.write().store.sign_up(name, email, password)?;
    Ok(())
}

pub fn sign_out(state: &mut Signal<SessionState>) {
    state.write().store.sign_out();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::Path;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::VirtualDom;
    use store::vault::DEFAULT_SESSION_KEY;
    use store::User;

    use super::*;

    /// What the screen under the session gate does once it mounts.
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Action {
        Nothing,
        SignIn,
        SignUp,
        SignOut,
    }

    /// Set by [`Gate`] to whether it saw a signed-in user after loading.
    type Seen = Rc<Cell<Option<bool>>>;

    #[component]
    fn App(dir: PathBuf, action: Action) -> Element {
        rsx! {
            SessionProvider {
                dir: dir,
                Gate { action: action }
            }
        }
    }

    /// Shows its child only in the state the child's action starts from,
    /// so the child unmounts as soon as the action succeeds.
    #[component]
    fn Gate(action: Action) -> Element {
        let session = use_session();
        let seen = try_use_context::<Seen>();

        let (loading, authenticated) = {
            let state = session.read();
            (state.loading, state.store.is_authenticated())
        };
        if loading {
            return rsx! { "Loading..." };
        }
        if let Some(seen) = seen {
            seen.set(Some(authenticated));
        }

        match (action, authenticated) {
            (Action::SignIn, false) => rsx! { SignInScreen {} },
            (Action::SignUp, false) => rsx! { SignUpScreen {} },
            (Action::SignOut, true) => rsx! { ProfileScreen {} },
            _ => rsx! { "Idle" },
        }
    }

    #[component]
    fn SignInScreen() -> Element {
        let mut session = use_session();
        use_hook(move || {
            spawn(async move {
                sign_in(&mut session, "dev@example.com", "pw").unwrap();
            })
        });
        rsx! { "Sign in" }
    }

    #[component]
    fn SignUpScreen() -> Element {
        let mut session = use_session();
        use_hook(move || {
            spawn(async move {
                sign_up(&mut session, "Ada", "ada@example.com", "pw").unwrap();
            })
        });
        rsx! { "Sign up" }
    }

    #[component]
    fn ProfileScreen() -> Element {
        let mut session = use_session();
        use_hook(move || {
            spawn(async move {
                sign_out(&mut session);
            })
        });
        rsx! { "Profile" }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gigboard_ui_session_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn dev_user() -> User {
        User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "dev@example.com".to_string(),
        }
    }

    async fn stored(dir: &Path) -> Session {
        make_vault(dir, DEFAULT_SESSION_KEY).load().await
    }

    async fn run(dir: &Path, action: Action) -> Option<bool> {
        let seen: Seen = Rc::new(Cell::new(None));
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                dir: dir.to_path_buf(),
                action,
            },
        )
        .with_root_context(seen.clone());
        dom.rebuild_in_place();

        for _ in 0..20 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            let _ = dom.render_immediate_to_vec();
        }
        seen.get()
    }

    #[tokio::test]
    async fn test_restores_session_on_mount() {
        let dir = temp_dir("restore");
        make_vault(&dir, DEFAULT_SESSION_KEY)
            .save(&Session::Authenticated(dev_user()))
            .await;

        assert_eq!(run(&dir, Action::Nothing).await, Some(true));
        assert_eq!(stored(&dir).await, Session::Authenticated(dev_user()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_starts_anonymous_without_saved_session() {
        let dir = temp_dir("fresh");

        assert_eq!(run(&dir, Action::Nothing).await, Some(false));
        assert_eq!(stored(&dir).await, Session::Anonymous);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_sign_out_from_unmounted_screen_is_saved() {
        let dir = temp_dir("sign_out");
        make_vault(&dir, DEFAULT_SESSION_KEY)
            .save(&Session::Authenticated(dev_user()))
            .await;

        assert_eq!(run(&dir, Action::SignOut).await, Some(false));
        assert_eq!(stored(&dir).await, Session::Anonymous);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_sign_in_from_unmounted_screen_is_saved() {
        let dir = temp_dir("sign_in");

        assert_eq!(run(&dir, Action::SignIn).await, Some(true));
        assert_eq!(stored(&dir).await, Session::Authenticated(dev_user()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_sign_up_from_unmounted_screen_is_saved() {
        let dir = temp_dir("sign_up");

        assert_eq!(run(&dir, Action::SignUp).await, Some(true));
        let session = stored(&dir).await;
        assert_eq!(session.user().unwrap().name, "Ada");
        assert_eq!(session.user().unwrap().email, "ada@example.com");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
