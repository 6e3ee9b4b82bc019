use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::scanner::Scanner;
use crate::hooks::{use_active_station, use_transactions};
use crate::models::card::LoyaltyCard;
use crate::models::transaction::{NewTransaction, TransactionRecord};
use crate::services::card_service::lookup_loyalty_card;
use crate::services::transaction_service::create_transaction;
use crate::utils::format::{format_currency, format_date, format_points};

/// Checkout amounts arrive as free text. Unparsable input becomes 0 and is
/// then rejected by transaction validation instead of erroring mid-typing.
pub fn parse_amount_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

#[function_component(CheckoutPage)]
pub fn checkout_page() -> Html {
    let transactions = use_transactions();
    let active = use_active_station();

    let linked_card = use_state(|| None::<LoyaltyCard>);
    let amount_ref = use_node_ref();
    let code_ref = use_node_ref();
    let redeem = use_state(|| false);
    let scanning = use_state(|| false);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let receipt = use_state(|| None::<TransactionRecord>);

    let station_token = active
        .active
        .as_ref()
        .map(|a| a.token.clone())
        .unwrap_or_default();

    // Shared by the scanner overlay and the manual-entry field
    let link_card = {
        let linked_card = linked_card.clone();
        let error = error.clone();
        let scanning = scanning.clone();

        Callback::from(move |code: String| {
            let linked_card = linked_card.clone();
            let error = error.clone();
            let scanning = scanning.clone();

            wasm_bindgen_futures::spawn_local(async move {
                scanning.set(false);
                match lookup_loyalty_card(&code).await {
                    Ok(card) => {
                        log::info!("🎟️ Linked card {}", card.token);
                        linked_card.set(Some(card));
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Card lookup failed: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let on_manual_link = {
        let code_ref = code_ref.clone();
        let link_card = link_card.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = code_ref.cast::<HtmlInputElement>() {
                link_card.emit(input.value());
                input.set_value("");
            }
        })
    };

    let unlink = {
        let linked_card = linked_card.clone();
        let redeem = redeem.clone();
        Callback::from(move |_: MouseEvent| {
            linked_card.set(None);
            redeem.set(false);
        })
    };

    let open_scanner = {
        let scanning = scanning.clone();
        Callback::from(move |_: MouseEvent| scanning.set(true))
    };
    let close_scanner = {
        let scanning = scanning.clone();
        Callback::from(move |_| scanning.set(false))
    };

    let toggle_redeem = {
        let redeem = redeem.clone();
        Callback::from(move |_: Event| redeem.set(!*redeem))
    };

    let on_submit = {
        let amount_ref = amount_ref.clone();
        let linked_card = linked_card.clone();
        let redeem = redeem.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let receipt = receipt.clone();
        let station_token = station_token.clone();
        let prepend = transactions.prepend.clone();
        let refresh = transactions.refresh.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(amount_input) = amount_ref.cast::<HtmlInputElement>() else {
                return;
            };

            let tx = NewTransaction {
                amount: parse_amount_input(&amount_input.value()),
                redeem: *redeem,
                loyalty_card_id: linked_card.as_ref().map(|c| c.token.clone()),
            };

            let station_token = station_token.clone();
            let linked_card = linked_card.clone();
            let redeem = redeem.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let receipt = receipt.clone();
            let prepend = prepend.clone();
            let refresh = refresh.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                error.set(None);

                match create_transaction(&tx, &station_token).await {
                    Ok(record) => {
                        log::info!("✅ Checkout recorded: {}", record.id);
                        prepend.emit(record.clone());
                        receipt.set(Some(record));
                        amount_input.set_value("");
                        linked_card.set(None);
                        redeem.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Checkout failed: {}", e);
                        error.set(Some(e));
                    }
                }
                // Reconcile with server-side truth either way; points and
                // discounts are recomputed there.
                refresh.emit(());
                submitting.set(false);
            });
        })
    };

    let dismiss_receipt = {
        let receipt = receipt.clone();
        Callback::from(move |_: MouseEvent| receipt.set(None))
    };

    let history_rows = transactions.transactions.iter().map(|tx| {
        html! {
            <tr>
                <td>{ format_date(tx.created_at.as_deref()) }</td>
                <td>{ tx.customer_name() }</td>
                <td>{ tx.station_name() }</td>
                <td>{ format_currency(Some(tx.final_amount)) }</td>
                <td>{ format_points(Some(tx.points_earned)) }</td>
                <td>{ format_points(Some(tx.points_redeemed)) }</td>
            </tr>
        }
    });

    html! {
        <div class="page checkout-page">
            <header class="page-header">
                <h2>{"Checkout"}</h2>
            </header>

            if active.active.is_none() {
                <p class="page-warning">
                    {"No station is selected on this device. Choose one on the Stations page before recording checkouts."}
                </p>
            }

            <section class="panel checkout-form-panel">
                if let Some(card) = linked_card.as_ref() {
                    <div class="linked-card">
                        <span>
                            {"Linked: "}
                            <strong>{ card.customer_name().unwrap_or("Customer") }</strong>
                            {" ("}
                            {format_points(Some(card.points_balance))}
                            {")"}
                        </span>
                        <button class="btn-link" onclick={unlink}>{"Unlink"}</button>
                    </div>
                } else {
                    <div class="card-link-controls">
                        <button class="btn-secondary" onclick={open_scanner}>
                            {"📷 Scan card"}
                        </button>
                        <form class="inline-form" onsubmit={on_manual_link}>
                            <input
                                type="text"
                                placeholder="Or type the card code"
                                ref={code_ref}
                            />
                            <button type="submit" class="btn-secondary">{"Link"}</button>
                        </form>
                    </div>
                }

                <form class="stacked-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="amount">{"Amount"}</label>
                        <input
                            type="text"
                            id="amount"
                            inputmode="decimal"
                            placeholder="0.00"
                            ref={amount_ref}
                        />
                    </div>

                    <label class="checkbox-group">
                        <input
                            type="checkbox"
                            checked={*redeem}
                            onchange={toggle_redeem}
                            disabled={linked_card.is_none()}
                        />
                        {"Redeem points for a discount"}
                    </label>

                    if let Some(err) = (*error).clone() {
                        <p class="form-error">{err}</p>
                    }

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Recording..." } else { "Record checkout" } }
                    </button>
                </form>
            </section>

            if let Some(record) = receipt.as_ref() {
                <section class="panel receipt">
                    <h3>{"Checkout recorded"}</h3>
                    <p>
                        {format_currency(Some(record.amount))}
                        if record.discount() > 0.0 {
                            {" with "}
                            {format_currency(Some(record.discount()))}
                            {" discount, charged "}
                            {format_currency(Some(record.final_amount))}
                        }
                    </p>
                    <p>
                        {"Earned "}{format_points(Some(record.points_earned))}
                        {", redeemed "}{format_points(Some(record.points_redeemed))}
                    </p>
                    <button class="btn-link" onclick={dismiss_receipt}>{"Close"}</button>
                </section>
            }

            if *scanning {
                <Scanner on_decode={link_card.clone()} on_close={close_scanner} />
            }

            <section class="panel">
                <h3>{"Recent checkouts"}</h3>
                if *transactions.loading {
                    <p class="loading-hint">{"Loading transactions..."}</p>
                } else if let Some(err) = (*transactions.error).clone() {
                    <p class="page-error">{err}</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"When"}</th>
                                <th>{"Customer"}</th>
                                <th>{"Station"}</th>
                                <th>{"Charged"}</th>
                                <th>{"Earned"}</th>
                                <th>{"Redeemed"}</th>
                            </tr>
                        </thead>
                        <tbody>{ for history_rows }</tbody>
                    </table>
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_input_parses_decimals() {
        assert_eq!(parse_amount_input("12.50"), 12.5);
        assert_eq!(parse_amount_input("  7 "), 7.0);
    }

    #[test]
    fn unparsable_amounts_become_zero() {
        assert_eq!(parse_amount_input(""), 0.0);
        assert_eq!(parse_amount_input("twelve"), 0.0);
        assert_eq!(parse_amount_input("12,50"), 0.0);
    }
}
