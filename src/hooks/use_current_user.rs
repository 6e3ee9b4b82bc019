use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::user::CurrentUser;
use crate::services::auth_service::{fetch_current_user, login, logout};

pub struct UseCurrentUserHandle {
    pub user: UseStateHandle<Option<CurrentUser>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub submitting: UseStateHandle<bool>,

    pub refresh: Callback<()>,
    pub sign_in: Callback<(String, String)>,
    pub sign_out: Callback<()>,
}

/// No-session is not an error; any other failure clears the user AND
/// carries a message the UI must show.
fn resolve_session_check(
    result: Result<Option<CurrentUser>, String>,
) -> (Option<CurrentUser>, Option<String>) {
    match result {
        Ok(current) => (current, None),
        Err(e) => (None, Some(e)),
    }
}

async fn check_session(
    mounted: &Rc<RefCell<bool>>,
    user: &UseStateHandle<Option<CurrentUser>>,
    loading: &UseStateHandle<bool>,
    error: &UseStateHandle<Option<String>>,
) {
    let result = fetch_current_user().await;
    if !*mounted.borrow() {
        return;
    }
    match &result {
        Ok(Some(current)) => log::info!("✅ Session restored for {}", current.username),
        Ok(None) => log::info!("ℹ️ No active session"),
        Err(e) => log::error!("❌ Session check failed: {}", e),
    }
    let (current, message) = resolve_session_check(result);
    user.set(current);
    error.set(message);
    loading.set(false);
}

/// Session hook: checks the current identity on mount, then exposes sign-in
/// and sign-out callbacks. `loading` starts true so the app can show a
/// splash instead of flashing the login form at a signed-in user. A mounted
/// guard discards results arriving after unmount.
#[hook]
pub fn use_current_user() -> UseCurrentUserHandle {
    let user = use_state(|| None::<CurrentUser>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let mounted = use_mut_ref(|| true);

    {
        let user = user.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    check_session(&mounted, &user, &loading, &error).await;
                });
            }
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    let refresh = {
        let user = user.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |_| {
            let user = user.clone();
            let loading = loading.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                check_session(&mounted, &user, &loading, &error).await;
            });
        })
    };

    let sign_in = {
        let user = user.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let mounted = mounted.clone();

        Callback::from(move |(username, password): (String, String)| {
            let user = user.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                error.set(None);

                let result = login(&username, &password).await;
                if !*mounted.borrow() {
                    return;
                }
                match result {
                    Ok(current) => {
                        log::info!("🔐 Signed in as {}", current.username);
                        user.set(Some(current));
                    }
                    Err(e) => {
                        log::error!("❌ Sign-in failed: {}", e);
                        error.set(Some(e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let sign_out = {
        let user = user.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |_| {
            let user = user.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = logout().await;
                if !*mounted.borrow() {
                    return;
                }
                match result {
                    Ok(()) => {
                        user.set(None);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Sign-out failed: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    UseCurrentUserHandle {
        user,
        loading,
        error,
        submitting,
        refresh,
        sign_in,
        sign_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::BusinessSummary;

    fn owner() -> CurrentUser {
        CurrentUser {
            id: "1".into(),
            username: "owner".into(),
            name: "Ada Lovelace".into(),
            email: "owner@example.com".into(),
            business: BusinessSummary::default(),
            avatar: None,
        }
    }

    #[test]
    fn no_session_is_not_an_error() {
        let (user, error) = resolve_session_check(Ok(None));
        assert!(user.is_none());
        assert!(error.is_none());
    }

    #[test]
    fn session_check_failure_clears_user_and_carries_a_message() {
        let (user, error) = resolve_session_check(Err("Unable to load profile.".into()));
        assert!(user.is_none());
        assert_eq!(error.as_deref(), Some("Unable to load profile."));
    }

    #[test]
    fn restored_session_clears_any_previous_error() {
        let (user, error) = resolve_session_check(Ok(Some(owner())));
        assert_eq!(user.unwrap().username, "owner");
        assert!(error.is_none());
    }
}
