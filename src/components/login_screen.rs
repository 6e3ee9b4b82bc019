use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    pub on_show_signup: Callback<()>,
    pub submitting: bool,
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let local_error = use_state(|| None::<String>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();
        let local_error = local_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value();
                let password = password_input.value();

                if username.trim().is_empty() || password.is_empty() {
                    local_error.set(Some("Enter your username and password.".to_string()));
                    return;
                }

                local_error.set(None);
                on_login.emit((username.trim().to_string(), password));
            }
        })
    };

    let message = local_error.as_ref().or(props.error.as_ref());

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🎟️"}</div>
                    </div>
                    <h1>{"LoyaltyPass"}</h1>
                    <p>{"Digital loyalty cards for your business"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Your username"
                            ref={username_ref}
                            autocomplete="username"
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            ref={password_ref}
                            autocomplete="current-password"
                        />
                    </div>

                    if let Some(msg) = message {
                        <p class="form-error">{msg}</p>
                    }

                    <button type="submit" class="btn-login" disabled={props.submitting}>
                        <span class="btn-text">
                            { if props.submitting { "Signing in..." } else { "Sign in" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"New to LoyaltyPass?"}</p>
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_show_signup.reform(|_| ())}
                        >
                            {"Create a business account"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
