#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use serde::{Deserialize, Serialize};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Sample {
    id: String,
    token: String,
}

// Exercises real browser localStorage with the serde round trip the app
// relies on for persisting the active station.
#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("browser storage");

    let sample = Sample {
        id: "7".into(),
        token: "STN-123".into(),
    };
    let json = serde_json::to_string(&sample).expect("serialize");
    storage.set_item("test.sample", &json).expect("write");

    let raw = storage
        .get_item("test.sample")
        .expect("read")
        .expect("present");
    let back: Sample = serde_json::from_str(&raw).expect("parse");
    assert_eq!(back, sample);

    storage.remove_item("test.sample").expect("remove");
    assert!(storage.get_item("test.sample").expect("read").is_none());
}
