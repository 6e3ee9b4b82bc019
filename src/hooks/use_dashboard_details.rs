use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::dashboard::DashboardDetails;
use crate::services::dashboard_service::fetch_dashboard_details;

pub struct UseDashboardDetailsHandle {
    pub details: UseStateHandle<Option<DashboardDetails>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,

    pub refresh: Callback<()>,
}

async fn load(
    mounted: &Rc<RefCell<bool>>,
    details: &UseStateHandle<Option<DashboardDetails>>,
    loading: &UseStateHandle<bool>,
    error: &UseStateHandle<Option<String>>,
) {
    let result = fetch_dashboard_details().await;
    if !*mounted.borrow() {
        return;
    }
    match result {
        Ok(data) => {
            details.set(Some(data));
            error.set(None);
        }
        Err(e) => {
            log::error!("❌ Dashboard details load failed: {}", e);
            details.set(None);
            error.set(Some(e));
        }
    }
    loading.set(false);
}

/// Secondary dashboard payload: readiness, revenue trend, recent activity.
/// Independent from the metrics hook; the page combines their loading flags.
#[hook]
pub fn use_dashboard_details() -> UseDashboardDetailsHandle {
    let details = use_state(|| None::<DashboardDetails>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let mounted = use_mut_ref(|| true);

    {
        let details = details.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    load(&mounted, &details, &loading, &error).await;
                });
            }
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    let refresh = {
        let details = details.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |_| {
            let details = details.clone();
            let loading = loading.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                load(&mounted, &details, &loading, &error).await;
            });
        })
    };

    UseDashboardDetailsHandle {
        details,
        loading,
        error,
        refresh,
    }
}
