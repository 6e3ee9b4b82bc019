use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::scanner_ffi::{init_qr_scanner, stop_qr_scanner};

#[derive(Properties, PartialEq)]
pub struct ScannerProps {
    pub on_decode: Callback<String>,
    pub on_close: Callback<()>,
}

/// Camera overlay for scanning a loyalty card QR code. The actual decoding
/// lives in JS; this component only owns the container element and the
/// lifecycle of the scanner session.
#[function_component(Scanner)]
pub fn scanner(props: &ScannerProps) -> Html {
    {
        let on_decode = props.on_decode.clone();
        let on_close = props.on_close.clone();

        use_effect_with((), move |_| {
            let decode_cb = Closure::<dyn Fn(String)>::new(move |code: String| {
                log::info!("🔍 Scanned code: {}", code);
                on_decode.emit(code);
            });
            let error_cb = Closure::<dyn Fn(String)>::new(move |message: String| {
                log::error!("❌ Scanner error: {}", message);
                on_close.emit(());
            });

            init_qr_scanner(
                "qr-scanner-container",
                decode_cb.as_ref().unchecked_ref(),
                error_cb.as_ref().unchecked_ref(),
            );

            move || {
                stop_qr_scanner();
                drop(decode_cb);
                drop(error_cb);
            }
        });
    }

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="scanner-overlay">
            <div class="scanner-frame">
                <div id="qr-scanner-container" class="scanner-viewport"></div>
                <button class="btn-secondary scanner-close" onclick={close_click}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
