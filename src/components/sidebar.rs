use yew::prelude::*;

use crate::components::app::Page;
use crate::models::user::CurrentUser;
use crate::stores::theme::{ThemeContext, ThemeMode};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_page: Page,
    pub on_navigate: Callback<Page>,
    pub user: CurrentUser,
    pub on_sign_out: Callback<()>,
}

const NAV_ITEMS: &[(Page, &str, &str)] = &[
    (Page::Dashboard, "📊", "Dashboard"),
    (Page::Checkout, "💳", "Checkout"),
    (Page::LoyaltyCards, "🎟️", "Loyalty cards"),
    (Page::Customers, "👥", "Customers"),
    (Page::Stations, "🖥️", "Stations"),
    (Page::Account, "⚙️", "Account"),
];

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let theme = use_context::<ThemeContext>();

    let nav_items = NAV_ITEMS.iter().map(|(page, icon, label)| {
        let on_navigate = props.on_navigate.clone();
        let page = *page;
        let active = props.current_page == page;
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(page));

        html! {
            <button
                class={classes!("nav-item", active.then_some("active"))}
                onclick={onclick}
            >
                <span class="nav-icon">{icon}</span>
                <span class="nav-label">{label}</span>
            </button>
        }
    });

    let theme_button = theme.map(|ctx| {
        let toggle = ctx.toggle.clone();
        let (icon, label) = match ctx.mode {
            ThemeMode::Light => ("🌙", "Dark mode"),
            ThemeMode::Dark => ("☀️", "Light mode"),
        };
        let onclick = Callback::from(move |_: MouseEvent| toggle.emit(()));
        html! {
            <button class="nav-item theme-toggle" onclick={onclick}>
                <span class="nav-icon">{icon}</span>
                <span class="nav-label">{label}</span>
            </button>
        }
    });

    let on_sign_out = props.on_sign_out.clone();
    let sign_out_click = Callback::from(move |_: MouseEvent| on_sign_out.emit(()));

    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-icon">{"🎟️"}</span>
                <span class="brand-name">{"LoyaltyPass"}</span>
            </div>

            <nav class="sidebar-nav">
                { for nav_items }
            </nav>

            <div class="sidebar-footer">
                { for theme_button }
                <div class="user-chip">
                    <div class="user-avatar">{props.user.initials()}</div>
                    <div class="user-meta">
                        <span class="user-name">{&props.user.name}</span>
                        <span class="user-business">{props.user.business_name()}</span>
                    </div>
                </div>
                <button class="nav-item sign-out" onclick={sign_out_click}>
                    <span class="nav-icon">{"🚪"}</span>
                    <span class="nav-label">{"Sign out"}</span>
                </button>
            </div>
        </aside>
    }
}
