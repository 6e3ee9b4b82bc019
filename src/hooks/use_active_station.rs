use yew::prelude::*;

use crate::models::station::Station;
use crate::stores::active_station::{self, ActiveStation};

pub struct UseActiveStationHandle {
    pub active: UseStateHandle<Option<ActiveStation>>,

    pub select: Callback<Station>,
    pub forget: Callback<()>,
}

/// Which station this browser acts as. Hydrated from localStorage on first
/// render, written back on every change.
#[hook]
pub fn use_active_station() -> UseActiveStationHandle {
    let active = use_state(active_station::load_persisted);

    let select = {
        let active = active.clone();
        Callback::from(move |station: Station| {
            active.set(Some(active_station::select(&station)));
        })
    };

    let forget = {
        let active = active.clone();
        Callback::from(move |_| {
            active_station::forget();
            active.set(None);
        })
    };

    UseActiveStationHandle {
        active,
        select,
        forget,
    }
}
