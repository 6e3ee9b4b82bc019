use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::station::Station;
use crate::services::station_service::{
    clear_prepared_slot, create_station, delete_station, list_stations,
};

pub struct UseStationsHandle {
    pub stations: UseStateHandle<Vec<Station>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub creating: UseStateHandle<bool>,

    pub refresh: Callback<()>,
    pub create: Callback<String>,
    pub remove: Callback<String>,
    pub clear_slot: Callback<Station>,
}

async fn load(
    mounted: &Rc<RefCell<bool>>,
    stations: &UseStateHandle<Vec<Station>>,
    loading: &UseStateHandle<bool>,
    error: &UseStateHandle<Option<String>>,
) {
    let result = list_stations().await;
    if !*mounted.borrow() {
        return;
    }
    match result {
        Ok(list) => {
            log::info!("📋 Loaded {} stations", list.len());
            stations.set(list);
            error.set(None);
        }
        Err(e) => {
            log::error!("❌ Stations load failed: {}", e);
            error.set(Some(e));
        }
    }
    loading.set(false);
}

#[hook]
pub fn use_stations() -> UseStationsHandle {
    let stations = use_state(Vec::<Station>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let creating = use_state(|| false);
    let mounted = use_mut_ref(|| true);

    {
        let stations = stations.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    load(&mounted, &stations, &loading, &error).await;
                });
            }
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    let refresh = {
        let stations = stations.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |_| {
            let stations = stations.clone();
            let loading = loading.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                load(&mounted, &stations, &loading, &error).await;
            });
        })
    };

    let create = {
        let stations = stations.clone();
        let error = error.clone();
        let creating = creating.clone();
        let mounted = mounted.clone();

        Callback::from(move |name: String| {
            if name.trim().is_empty() {
                error.set(Some("Enter a station name.".to_string()));
                return;
            }

            let stations = stations.clone();
            let error = error.clone();
            let creating = creating.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                creating.set(true);
                let result = create_station(&name).await;
                if !*mounted.borrow() {
                    return;
                }
                match result {
                    Ok(station) => {
                        log::info!("✅ Station created: {}", station.name);
                        let mut list = (*stations).clone();
                        list.push(station);
                        stations.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Station create failed: {}", e);
                        error.set(Some(e));
                    }
                }
                creating.set(false);
            });
        })
    };

    let remove = {
        let stations = stations.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |station_id: String| {
            let stations = stations.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = delete_station(&station_id).await;
                if !*mounted.borrow() {
                    return;
                }
                match result {
                    Ok(()) => {
                        log::info!("🗑️ Station {} deleted", station_id);
                        let list: Vec<Station> = stations
                            .iter()
                            .filter(|s| s.id != station_id)
                            .cloned()
                            .collect();
                        stations.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Station delete failed: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let clear_slot = {
        let stations = stations.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |station: Station| {
            let stations = stations.clone();
            let loading = loading.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match clear_prepared_slot(&station).await {
                    // Refetch so slot state comes from the server
                    Ok(()) => load(&mounted, &stations, &loading, &error).await,
                    Err(e) => {
                        if *mounted.borrow() {
                            log::error!("❌ Slot clear failed: {}", e);
                            error.set(Some(e));
                        }
                    }
                }
            });
        })
    };

    UseStationsHandle {
        stations,
        loading,
        error,
        creating,
        refresh,
        create,
        remove,
        clear_slot,
    }
}
