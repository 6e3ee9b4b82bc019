use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::user::CurrentUser;
use crate::services::auth_service::update_password;

#[derive(Properties, PartialEq)]
pub struct AccountPageProps {
    pub user: CurrentUser,
    /// Re-probes the identity endpoint so profile edits made elsewhere show up.
    pub on_refresh: Callback<()>,
}

/// Local checks before the password change hits the network.
pub fn validate_password_form(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), String> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Fill in all three password fields.".to_string());
    }
    if new != confirm {
        return Err("New passwords do not match.".to_string());
    }
    if new.len() < 8 {
        return Err("New password must be at least 8 characters.".to_string());
    }
    Ok(())
}

#[function_component(AccountPage)]
pub fn account_page(props: &AccountPageProps) -> Html {
    let current_ref = use_node_ref();
    let new_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let message = use_state(|| None::<Result<String, String>>);
    let submitting = use_state(|| false);

    let on_submit = {
        let current_ref = current_ref.clone();
        let new_ref = new_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let message = message.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(current_input), Some(new_input), Some(confirm_input)) = (
                current_ref.cast::<HtmlInputElement>(),
                new_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let current = current_input.value();
            let new = new_input.value();
            let confirm = confirm_input.value();

            if let Err(e) = validate_password_form(&current, &new, &confirm) {
                message.set(Some(Err(e)));
                return;
            }

            let message = message.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                match update_password(&current, &new).await {
                    Ok(()) => {
                        log::info!("✅ Password updated");
                        message.set(Some(Ok("Password updated.".to_string())));
                        current_input.set_value("");
                        new_input.set_value("");
                        confirm_input.set_value("");
                    }
                    Err(e) => {
                        log::error!("❌ Password update failed: {}", e);
                        message.set(Some(Err(e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="page account-page">
            <header class="page-header">
                <h2>{"Account"}</h2>
            </header>

            <section class="panel">
                <div class="page-header">
                    <h3>{"Profile"}</h3>
                    <button
                        class="btn-secondary"
                        onclick={props.on_refresh.reform(|_: MouseEvent| ())}
                    >
                        {"Refresh"}
                    </button>
                </div>
                <dl class="profile-list">
                    <dt>{"Name"}</dt>
                    <dd>{&props.user.name}</dd>
                    <dt>{"Username"}</dt>
                    <dd>{&props.user.username}</dd>
                    <dt>{"Email"}</dt>
                    <dd>{&props.user.email}</dd>
                    <dt>{"Business"}</dt>
                    <dd>{props.user.business_name()}</dd>
                </dl>
            </section>

            <section class="panel">
                <h3>{"Change password"}</h3>
                <form class="stacked-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="current-password">{"Current password"}</label>
                        <input
                            type="password"
                            id="current-password"
                            ref={current_ref}
                            autocomplete="current-password"
                        />
                    </div>
                    <div class="form-group">
                        <label for="new-password">{"New password"}</label>
                        <input
                            type="password"
                            id="new-password"
                            ref={new_ref}
                            autocomplete="new-password"
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">{"Confirm new password"}</label>
                        <input
                            type="password"
                            id="confirm-password"
                            ref={confirm_ref}
                            autocomplete="new-password"
                        />
                    </div>

                    {
                        match &*message {
                            Some(Ok(msg)) => html! { <p class="form-success">{msg}</p> },
                            Some(Err(msg)) => html! { <p class="form-error">{msg}</p> },
                            None => Html::default(),
                        }
                    }

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Updating..." } else { "Update password" } }
                    </button>
                </form>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_all_fields() {
        assert!(validate_password_form("", "newpassword", "newpassword").is_err());
        assert!(validate_password_form("old", "", "").is_err());
    }

    #[test]
    fn requires_matching_confirmation() {
        assert_eq!(
            validate_password_form("old", "newpassword", "different"),
            Err("New passwords do not match.".to_string())
        );
    }

    #[test]
    fn requires_minimum_length() {
        assert_eq!(
            validate_password_form("old", "short", "short"),
            Err("New password must be at least 8 characters.".to_string())
        );
    }

    #[test]
    fn accepts_a_valid_form() {
        assert!(validate_password_form("old", "newpassword", "newpassword").is_ok());
    }
}
