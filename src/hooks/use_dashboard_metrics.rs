use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::dashboard::DashboardMetrics;
use crate::services::dashboard_service::fetch_dashboard_metrics;

pub struct UseDashboardMetricsHandle {
    pub metrics: UseStateHandle<Option<DashboardMetrics>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,

    pub refresh: Callback<()>,
}

async fn load(
    mounted: &Rc<RefCell<bool>>,
    metrics: &UseStateHandle<Option<DashboardMetrics>>,
    loading: &UseStateHandle<bool>,
    error: &UseStateHandle<Option<String>>,
) {
    let result = fetch_dashboard_metrics().await;
    if !*mounted.borrow() {
        return;
    }
    match result {
        Ok(data) => {
            metrics.set(Some(data));
            error.set(None);
        }
        Err(e) => {
            log::error!("❌ Metrics load failed: {}", e);
            metrics.set(None);
            error.set(Some(e));
        }
    }
    loading.set(false);
}

#[hook]
pub fn use_dashboard_metrics() -> UseDashboardMetricsHandle {
    let metrics = use_state(|| None::<DashboardMetrics>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let mounted = use_mut_ref(|| true);

    {
        let metrics = metrics.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    load(&mounted, &metrics, &loading, &error).await;
                });
            }
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    let refresh = {
        let metrics = metrics.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |_| {
            let metrics = metrics.clone();
            let loading = loading.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                load(&mounted, &metrics, &loading, &error).await;
            });
        })
    };

    UseDashboardMetricsHandle {
        metrics,
        loading,
        error,
        refresh,
    }
}
