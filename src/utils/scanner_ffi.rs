// ============================================================================
// QR SCANNER FFI - bindings to the JavaScript scanner glue
// ============================================================================
// Thin wrappers around the camera/decoder code in index.html. No state,
// no logic on this side.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initQrScanner)]
    pub fn init_qr_scanner(
        container_id: &str,
        on_decode: &js_sys::Function,
        on_error: &js_sys::Function,
    );

    #[wasm_bindgen(js_name = stopQrScanner)]
    pub fn stop_qr_scanner();
}
