use yew::prelude::*;

use crate::components::account::AccountPage;
use crate::components::checkout::CheckoutPage;
use crate::components::customers::CustomersPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login_screen::LoginScreen;
use crate::components::loyalty_cards::LoyaltyCardsPage;
use crate::components::pass_download::PassDownloadPage;
use crate::components::sidebar::Sidebar;
use crate::components::signup_form::SignupForm;
use crate::components::stations::StationsPage;
use crate::hooks::use_current_user;
use crate::stores::theme::{apply_to_document, load_theme, store_theme, ThemeContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Checkout,
    LoyaltyCards,
    Customers,
    Stations,
    Account,
}

/// Extract the station slug from a customer-facing pass link path like
/// "/pass/front-counter". Anything else is the staff dashboard.
pub fn pass_slug_from_path(path: &str) -> Option<String> {
    let trimmed = path.trim_matches('/');
    let mut parts = trimmed.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("pass"), Some(slug), None) if !slug.is_empty() => Some(slug.to_string()),
        _ => None,
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_current_user();
    let page = use_state(|| Page::Dashboard);
    let theme = use_state(load_theme);
    let show_signup = use_state(|| false);

    // Keep <html data-theme> in sync with the stored preference
    {
        let mode = *theme;
        use_effect_with(mode, move |_| {
            apply_to_document(mode);
            || ()
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            store_theme(next);
            theme.set(next);
        })
    };

    let theme_ctx = ThemeContext {
        mode: *theme,
        toggle: toggle_theme,
    };

    // Customer-facing pass link: no session, no sidebar
    let pass_slug = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .and_then(|p| pass_slug_from_path(&p));

    if let Some(slug) = pass_slug {
        return html! {
            <ContextProvider<ThemeContext> context={theme_ctx}>
                <PassDownloadPage {slug} />
            </ContextProvider<ThemeContext>>
        };
    }

    if *session.loading {
        return html! {
            <div class="app-splash">
                <div class="logo-icon">{"🎟️"}</div>
                <p>{"Loading..."}</p>
            </div>
        };
    }

    let Some(user) = (*session.user).clone() else {
        if *show_signup {
            let done = {
                let show_signup = show_signup.clone();
                Callback::from(move |_| show_signup.set(false))
            };
            return html! {
                <ContextProvider<ThemeContext> context={theme_ctx}>
                    <SignupForm on_done={done} />
                </ContextProvider<ThemeContext>>
            };
        }

        let open_signup = {
            let show_signup = show_signup.clone();
            Callback::from(move |_| show_signup.set(true))
        };
        return html! {
            <ContextProvider<ThemeContext> context={theme_ctx}>
                <LoginScreen
                    on_login={session.sign_in.clone()}
                    on_show_signup={open_signup}
                    submitting={*session.submitting}
                    error={(*session.error).clone()}
                />
            </ContextProvider<ThemeContext>>
        };
    };

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let content = match *page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Checkout => html! { <CheckoutPage /> },
        Page::LoyaltyCards => html! { <LoyaltyCardsPage /> },
        Page::Customers => html! { <CustomersPage /> },
        Page::Stations => html! { <StationsPage /> },
        Page::Account => html! {
            <AccountPage user={user.clone()} on_refresh={session.refresh.clone()} />
        },
    };

    html! {
        <ContextProvider<ThemeContext> context={theme_ctx}>
            <div class="app-shell">
                <Sidebar
                    current_page={*page}
                    on_navigate={on_navigate}
                    user={user.clone()}
                    on_sign_out={session.sign_out.clone()}
                />
                <main class="app-content">
                    {content}
                </main>
            </div>
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_paths_yield_their_slug() {
        assert_eq!(
            pass_slug_from_path("/pass/front-counter"),
            Some("front-counter".to_string())
        );
        assert_eq!(
            pass_slug_from_path("/pass/front-counter/"),
            Some("front-counter".to_string())
        );
    }

    #[test]
    fn dashboard_paths_yield_none() {
        assert_eq!(pass_slug_from_path("/"), None);
        assert_eq!(pass_slug_from_path(""), None);
        assert_eq!(pass_slug_from_path("/pass/"), None);
        assert_eq!(pass_slug_from_path("/pass/a/b"), None);
        assert_eq!(pass_slug_from_path("/stations"), None);
    }
}
