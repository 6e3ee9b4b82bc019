use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_active_station, use_stations};
use crate::models::station::Station;
use crate::services::station_service::public_pass_url;
use crate::utils::format::format_date;

#[function_component(StationsPage)]
pub fn stations_page() -> Html {
    let stations = use_stations();
    let active = use_active_station();
    let name_ref = use_node_ref();
    let copied_id = use_state(|| None::<String>);

    let on_create = {
        let name_ref = name_ref.clone();
        let create = stations.create.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                create.emit(input.value());
                input.set_value("");
            }
        })
    };

    let copy_token = {
        let copied_id = copied_id.clone();

        Callback::from(move |(station_id, token): (String, String)| {
            let copied_id = copied_id.clone();

            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let promise = clipboard.write_text(&token);

                wasm_bindgen_futures::spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => {
                            log::info!("📋 Token copied for station {}", station_id);
                            copied_id.set(Some(station_id));
                            let copied_id = copied_id.clone();
                            Timeout::new(2_000, move || {
                                copied_id.set(None);
                            })
                            .forget();
                        }
                        Err(e) => {
                            log::error!("❌ Clipboard write failed: {:?}", e);
                        }
                    }
                });
            }
        })
    };

    let on_delete = {
        let remove = stations.remove.clone();

        Callback::from(move |station: Station| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!(
                        "Delete station \"{}\"? Devices using its token will stop working.",
                        station.name
                    ))
                    .unwrap_or(false)
                })
                .unwrap_or(false);

            if confirmed {
                remove.emit(station.id.clone());
            }
        })
    };

    let rows = stations.stations.iter().map(|station| {
        let is_active = active
            .active
            .as_ref()
            .map(|a| a.id == station.id)
            .unwrap_or(false);
        let is_copied = copied_id.as_deref() == Some(station.id.as_str());

        let on_select = {
            let select = active.select.clone();
            let station = station.clone();
            Callback::from(move |_: MouseEvent| select.emit(station.clone()))
        };
        let on_copy = {
            let copy_token = copy_token.clone();
            let id = station.id.clone();
            let token = station.api_token.clone();
            Callback::from(move |_: MouseEvent| copy_token.emit((id.clone(), token.clone())))
        };
        let on_remove = {
            let on_delete = on_delete.clone();
            let station = station.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(station.clone()))
        };
        let on_clear = {
            let clear_slot = stations.clear_slot.clone();
            let station = station.clone();
            Callback::from(move |_: MouseEvent| clear_slot.emit(station.clone()))
        };

        let pass_link = station.slug.as_ref().map(|slug| {
            let href = public_pass_url(slug, "apple", true);
            html! {
                <a class="pass-link" href={href} target="_blank" rel="noopener">
                    {"Pass link"}
                </a>
            }
        });

        html! {
            <tr class={classes!(is_active.then_some("active-row"))}>
                <td>
                    {&station.name}
                    if is_active {
                        <span class="active-badge">{"This device"}</span>
                    }
                </td>
                <td class="token-cell">
                    <code>{&station.api_token}</code>
                    <button class="btn-icon" onclick={on_copy} title="Copy token">
                        { if is_copied { "✅" } else { "📋" } }
                    </button>
                </td>
                <td>
                    if station.has_prepared_card() {
                        <span class="slot-ready">{"Pass ready"}</span>
                        <button class="btn-link" onclick={on_clear}>{"Clear"}</button>
                    } else {
                        <span class="slot-empty">{"Empty"}</span>
                    }
                </td>
                <td>{ format_date(station.last_activity()) }</td>
                <td>{ pass_link.unwrap_or_default() }</td>
                <td class="row-actions">
                    if !is_active {
                        <button class="btn-secondary" onclick={on_select}>
                            {"Use on this device"}
                        </button>
                    }
                    <button class="btn-danger" onclick={on_remove}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    let forget_active = {
        let forget = active.forget.clone();
        Callback::from(move |_: MouseEvent| forget.emit(()))
    };

    let total = stations.stations.len();
    let prepared = stations
        .stations
        .iter()
        .filter(|s| s.has_prepared_card())
        .count();
    let idle = total - prepared;

    let active_card = active.active.as_ref().map(|selection| {
        html! {
            <section class="panel active-device-card">
                <h3>{"This device"}</h3>
                <p>
                    {"Acting as "}
                    <strong>{&selection.name}</strong>
                    {". Issuance and checkout calls from this browser use its token."}
                </p>
                <button class="btn-link" onclick={forget_active.clone()}>
                    {"Forget this device's station"}
                </button>
            </section>
        }
    });

    html! {
        <div class="page stations-page">
            <header class="page-header">
                <h2>{"Stations"}</h2>
            </header>

            <div class="kpi-grid">
                <div class="kpi-card">
                    <span class="kpi-label">{"Stations"}</span>
                    <span class="kpi-value">{total}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-label">{"Pass ready"}</span>
                    <span class="kpi-value">{prepared}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-label">{"Idle"}</span>
                    <span class="kpi-value">{idle}</span>
                </div>
            </div>

            { active_card.unwrap_or_default() }

            <form class="inline-form" onsubmit={on_create}>
                <input
                    type="text"
                    placeholder="New station name"
                    ref={name_ref}
                />
                <button type="submit" class="btn-primary" disabled={*stations.creating}>
                    { if *stations.creating { "Creating..." } else { "Add station" } }
                </button>
            </form>

            if let Some(err) = (*stations.error).clone() {
                <p class="page-error">{err}</p>
            }

            if *stations.loading {
                <p class="loading-hint">{"Loading stations..."}</p>
            } else if stations.stations.is_empty() {
                <p class="empty-hint">{"No stations yet. Add one for each checkout device."}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Token"}</th>
                            <th>{"Prepared slot"}</th>
                            <th>{"Last activity"}</th>
                            <th>{"Customer link"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            }
        </div>
    }
}
