use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::auth_service::{signup, SignupPayload};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Fired after a successful signup, switching back to the login screen.
    pub on_done: Callback<()>,
}

/// Raw field values as typed; `build_signup_payload` validates and converts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFields {
    pub business_name: String,
    pub business_email: String,
    pub reward_rate: String,
    pub redemption_points: String,
    pub redemption_rate: String,
    pub logo_url: String,
    pub primary_color: String,
    pub background_color: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn build_signup_payload(fields: &SignupFields) -> Result<SignupPayload, String> {
    if fields.business_name.trim().is_empty() {
        return Err("Enter your business name.".to_string());
    }
    if fields.business_email.trim().is_empty() {
        return Err("Enter your business email.".to_string());
    }
    if fields.reward_rate.trim().parse::<f64>().map(|r| r < 0.0).unwrap_or(true) {
        return Err("Enter a valid reward rate.".to_string());
    }
    let redemption_points = fields
        .redemption_points
        .trim()
        .parse::<i64>()
        .unwrap_or(0);
    if redemption_points < 1 {
        return Err("Enter how many points a reward costs.".to_string());
    }
    match fields.redemption_rate.trim().parse::<f64>() {
        Ok(rate) if (0.0..=1.0).contains(&rate) => {}
        _ => return Err("Redemption rate must be between 0 and 1.".to_string()),
    }
    if fields.logo_url.trim().is_empty() {
        return Err("Enter a logo URL.".to_string());
    }
    if fields.password.len() < 8 {
        return Err("Password must be at least 8 characters.".to_string());
    }
    if fields.password != fields.confirm_password {
        return Err("Passwords do not match.".to_string());
    }

    Ok(SignupPayload {
        business_name: fields.business_name.trim().to_string(),
        reward_rate: fields.reward_rate.trim().to_string(),
        redemption_points,
        redemption_rate: fields.redemption_rate.trim().to_string(),
        logo_url: fields.logo_url.trim().to_string(),
        primary_color: fields.primary_color.clone(),
        background_color: fields.background_color.clone(),
        username: fields.business_email.trim().to_string(),
        password: fields.password.clone(),
    })
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let reward_rate_ref = use_node_ref();
    let redemption_points_ref = use_node_ref();
    let redemption_rate_ref = use_node_ref();
    let logo_ref = use_node_ref();
    let primary_color_ref = use_node_ref();
    let background_color_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let submitting = use_state(|| false);

    let on_submit = {
        let refs = [
            name_ref.clone(),
            email_ref.clone(),
            reward_rate_ref.clone(),
            redemption_points_ref.clone(),
            redemption_rate_ref.clone(),
            logo_ref.clone(),
            primary_color_ref.clone(),
            background_color_ref.clone(),
            password_ref.clone(),
            confirm_ref.clone(),
        ];
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
        let on_done = props.on_done.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let values: Vec<String> = refs
                .iter()
                .map(|r| {
                    r.cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default()
                })
                .collect();
            let fields = SignupFields {
                business_name: values[0].clone(),
                business_email: values[1].clone(),
                reward_rate: values[2].clone(),
                redemption_points: values[3].clone(),
                redemption_rate: values[4].clone(),
                logo_url: values[5].clone(),
                primary_color: values[6].clone(),
                background_color: values[7].clone(),
                password: values[8].clone(),
                confirm_password: values[9].clone(),
            };

            let payload = match build_signup_payload(&fields) {
                Ok(payload) => payload,
                Err(e) => {
                    error.set(Some(e));
                    return;
                }
            };

            let error = error.clone();
            let success = success.clone();
            let submitting = submitting.clone();
            let on_done = on_done.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                error.set(None);

                match signup(&payload).await {
                    Ok(()) => {
                        log::info!("✅ Business account created");
                        success.set(true);
                        let on_done = on_done.clone();
                        Timeout::new(1_200, move || {
                            on_done.emit(());
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Signup failed: {}", e);
                        error.set(Some(e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let back_click = {
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| on_done.emit(()))
    };

    html! {
        <div class="login-screen">
            <div class="login-container signup-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🎟️"}</div>
                    </div>
                    <h1>{"Create your account"}</h1>
                    <p>{"Set up your business workspace and loyalty program."}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="business-name">{"Business name"}</label>
                        <input
                            type="text"
                            id="business-name"
                            placeholder="John Doe's Donuts"
                            ref={name_ref}
                        />
                    </div>
                    <div class="form-group">
                        <label for="business-email">{"Business email (username)"}</label>
                        <input
                            type="email"
                            id="business-email"
                            placeholder="owner@example.com"
                            ref={email_ref}
                            autocomplete="email"
                        />
                    </div>
                    <div class="form-group">
                        <label for="reward-rate">{"Reward rate"}</label>
                        <input
                            type="number"
                            id="reward-rate"
                            min="0"
                            step="0.1"
                            value="1.0"
                            ref={reward_rate_ref}
                        />
                        <span class="field-hint">{"Points earned per 1.00 spent."}</span>
                    </div>
                    <div class="form-group">
                        <label for="redemption-points">{"Points needed for a reward"}</label>
                        <input
                            type="number"
                            id="redemption-points"
                            min="1"
                            value="100"
                            ref={redemption_points_ref}
                        />
                    </div>
                    <div class="form-group">
                        <label for="redemption-rate">{"Redemption rate"}</label>
                        <input
                            type="number"
                            id="redemption-rate"
                            min="0"
                            max="1"
                            step="0.01"
                            value="0.10"
                            ref={redemption_rate_ref}
                        />
                        <span class="field-hint">{"Discount as a decimal (0.10 = 10% off)."}</span>
                    </div>
                    <div class="form-group">
                        <label for="logo-url">{"Logo URL"}</label>
                        <input
                            type="url"
                            id="logo-url"
                            placeholder="https://example.com/logo.png"
                            ref={logo_ref}
                        />
                    </div>
                    <div class="form-group">
                        <label for="primary-color">{"Card color"}</label>
                        <input
                            type="color"
                            id="primary-color"
                            value="#0057ff"
                            ref={primary_color_ref}
                        />
                    </div>
                    <div class="form-group">
                        <label for="background-color">{"Card background color"}</label>
                        <input
                            type="color"
                            id="background-color"
                            value="#ffffff"
                            ref={background_color_ref}
                        />
                    </div>
                    <div class="form-group">
                        <label for="signup-password">{"Password"}</label>
                        <input
                            type="password"
                            id="signup-password"
                            ref={password_ref}
                            autocomplete="new-password"
                        />
                    </div>
                    <div class="form-group">
                        <label for="signup-confirm">{"Confirm password"}</label>
                        <input
                            type="password"
                            id="signup-confirm"
                            ref={confirm_ref}
                            autocomplete="new-password"
                        />
                    </div>

                    if let Some(err) = (*error).clone() {
                        <p class="form-error">{err}</p>
                    }
                    if *success {
                        <p class="form-success">{"Account created! Taking you to sign-in..."}</p>
                    }

                    <button type="submit" class="btn-login" disabled={*submitting || *success}>
                        <span class="btn-text">
                            { if *submitting { "Creating account..." } else { "Create account" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"Already have an account?"}</p>
                        <button type="button" class="btn-register-link" onclick={back_click}>
                            {"Sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> SignupFields {
        SignupFields {
            business_name: "John Doe's Donuts".into(),
            business_email: "owner@example.com".into(),
            reward_rate: "1.0".into(),
            redemption_points: "100".into(),
            redemption_rate: "0.10".into(),
            logo_url: "https://example.com/logo.png".into(),
            primary_color: "#0057ff".into(),
            background_color: "#ffffff".into(),
            password: "supersecret".into(),
            confirm_password: "supersecret".into(),
        }
    }

    #[test]
    fn valid_fields_build_the_wire_payload() {
        let payload = build_signup_payload(&valid_fields()).unwrap();
        assert_eq!(payload.username, "owner@example.com");
        assert_eq!(payload.redemption_points, 100);
        assert_eq!(payload.reward_rate, "1.0");

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["business_name"], "John Doe's Donuts");
        assert_eq!(body["redemption_points"], 100);
        assert_eq!(body["reward_rate"], "1.0");
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut fields = valid_fields();
        fields.confirm_password = "different".into();
        assert_eq!(
            build_signup_payload(&fields),
            Err("Passwords do not match.".to_string())
        );
    }

    #[test]
    fn short_passwords_are_rejected() {
        let mut fields = valid_fields();
        fields.password = "short".into();
        fields.confirm_password = "short".into();
        assert!(build_signup_payload(&fields).is_err());
    }

    #[test]
    fn redemption_settings_must_parse() {
        let mut fields = valid_fields();
        fields.redemption_points = "zero".into();
        assert_eq!(
            build_signup_payload(&fields),
            Err("Enter how many points a reward costs.".to_string())
        );

        let mut fields = valid_fields();
        fields.redemption_rate = "1.5".into();
        assert_eq!(
            build_signup_payload(&fields),
            Err("Redemption rate must be between 0 and 1.".to_string())
        );
    }

    #[test]
    fn required_text_fields_are_checked_in_order() {
        let mut fields = valid_fields();
        fields.business_name = "  ".into();
        assert_eq!(
            build_signup_payload(&fields),
            Err("Enter your business name.".to_string())
        );

        let mut fields = valid_fields();
        fields.logo_url = "".into();
        assert_eq!(
            build_signup_payload(&fields),
            Err("Enter a logo URL.".to_string())
        );
    }
}
