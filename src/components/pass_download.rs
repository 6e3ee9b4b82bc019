use yew::prelude::*;

use crate::services::station_service::{probe_prepared_pass, public_pass_url};

#[derive(Properties, PartialEq)]
pub struct PassDownloadPageProps {
    pub slug: String,
}

/// Customer-facing page behind a station's pass link. Probes the slot before
/// navigating so a stale link shows a message instead of a broken download.
#[function_component(PassDownloadPage)]
pub fn pass_download_page(props: &PassDownloadPageProps) -> Html {
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_download = {
        let slug = props.slug.clone();
        let error = error.clone();
        let busy = busy.clone();

        Callback::from(move |_: MouseEvent| {
            let slug = slug.clone();
            let error = error.clone();
            let busy = busy.clone();

            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                error.set(None);

                match probe_prepared_pass(&slug).await {
                    Ok(()) => {
                        // ts defeats any cached copy of a previous pass file
                        let url = format!(
                            "{}&ts={}",
                            public_pass_url(&slug, "apple", true),
                            js_sys::Date::now() as u64
                        );
                        log::info!("🎫 Navigating to pass download");
                        if let Some(window) = web_sys::window() {
                            if let Err(e) = window.location().set_href(&url) {
                                log::error!("❌ Navigation failed: {:?}", e);
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!("⚠️ Pass not available: {}", e);
                        error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="pass-download-page">
            <div class="pass-card">
                <div class="logo-icon">{"🎟️"}</div>
                <h1>{"Your loyalty card is ready"}</h1>
                <p>{"Tap below to add it to your wallet."}</p>

                if let Some(err) = (*error).clone() {
                    <p class="page-error">{err}</p>
                }

                <button class="btn-primary" onclick={on_download} disabled={*busy}>
                    { if *busy { "Checking..." } else { "Add to Apple Wallet" } }
                </button>
            </div>
        </div>
    }
}
