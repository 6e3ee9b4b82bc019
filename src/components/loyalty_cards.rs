use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_active_station;
use crate::models::card::{BusinessCustomer, CardSummary, IssuedCard};
use crate::services::card_service::{issue_loyalty_card, list_business_customers};
use crate::utils::format::format_points;

/// Insert or replace the row for the issued card's customer, matching on
/// customer id. A re-issue for an existing customer updates in place.
pub fn upsert_customer_row(rows: &[BusinessCustomer], issued: &IssuedCard) -> Vec<BusinessCustomer> {
    let new_row = BusinessCustomer {
        id: issued.customer.id.clone(),
        customer: issued.customer.clone(),
        loyalty_card: Some(CardSummary {
            token: issued.loyalty_card.token.clone(),
            points_balance: issued.loyalty_card.points_balance,
        }),
    };

    let mut out = rows.to_vec();
    if let Some(existing) = out.iter_mut().find(|r| r.customer.id == issued.customer.id) {
        *existing = new_row;
    } else {
        out.insert(0, new_row);
    }
    out
}

#[function_component(LoyaltyCardsPage)]
pub fn loyalty_cards_page() -> Html {
    let active = use_active_station();
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let rows = use_state(Vec::<BusinessCustomer>::new);
    let rows_loading = use_state(|| true);
    let issued = use_state(|| None::<IssuedCard>);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Registered cards table
    {
        let rows = rows.clone();
        let rows_loading = rows_loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match list_business_customers().await {
                    Ok(list) => {
                        log::info!("📋 Loaded {} registered cards", list.len());
                        rows.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Card list load failed: {}", e);
                        error.set(Some(e));
                    }
                }
                rows_loading.set(false);
            });
            || ()
        });
    }

    let station_token = active
        .active
        .as_ref()
        .map(|a| a.token.clone())
        .unwrap_or_default();

    let on_submit = {
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let rows = rows.clone();
        let issued = issued.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let station_token = station_token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(phone_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let name = name_input.value();
            let phone = phone_input.value();
            let station_token = station_token.clone();
            let rows = rows.clone();
            let issued = issued.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                error.set(None);

                match issue_loyalty_card(&name, &phone, &station_token).await {
                    Ok(card) => {
                        log::info!("✅ Card issued for {}", card.customer.name);
                        rows.set(upsert_customer_row(&rows, &card));
                        issued.set(Some(card));
                        name_input.set_value("");
                        phone_input.set_value("");
                    }
                    Err(e) => {
                        log::error!("❌ Card issue failed: {}", e);
                        error.set(Some(e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let dismiss_receipt = {
        let issued = issued.clone();
        Callback::from(move |_: MouseEvent| issued.set(None))
    };

    html! {
        <div class="page loyalty-cards-page">
            <header class="page-header">
                <h2>{"Loyalty cards"}</h2>
            </header>

            if active.active.is_none() {
                <p class="page-warning">
                    {"No station is selected on this device. Choose one on the Stations page before issuing cards."}
                </p>
            }

            <section class="panel">
                <h3>{"Issue a new card"}</h3>
                <form class="stacked-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="customer-name">{"Customer name"}</label>
                        <input
                            type="text"
                            id="customer-name"
                            placeholder="e.g. Dana Reyes"
                            ref={name_ref}
                        />
                    </div>
                    <div class="form-group">
                        <label for="customer-phone">{"Phone number"}</label>
                        <input
                            type="tel"
                            id="customer-phone"
                            placeholder="e.g. +1 555 123 4567"
                            ref={phone_ref}
                        />
                    </div>

                    if let Some(err) = (*error).clone() {
                        <p class="form-error">{err}</p>
                    }

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Issuing..." } else { "Issue card" } }
                    </button>
                </form>
            </section>

            if let Some(card) = issued.as_ref() {
                <section class="panel issue-receipt">
                    <h3>{"Card issued"}</h3>
                    <p>
                        <strong>{&card.customer.name}</strong>
                        {" now has card "}
                        <code>{&card.loyalty_card.token}</code>
                        {" with "}
                        {format_points(Some(card.loyalty_card.points_balance))}
                    </p>

                    if let Some(url) = card.prepared_pass_url.as_ref() {
                        <p>
                            {"The wallet pass is staged at this station. Customer link: "}
                            <a href={url.clone()} target="_blank" rel="noopener">{url}</a>
                        </p>
                    }

                    if let Some(wallet) = card.wallet.as_ref() {
                        <div class="wallet-links">
                            if let Some(apple) = wallet.apple.as_ref() {
                                <a class="btn-secondary" href={apple.download_url.clone()}>
                                    {"Apple Wallet"}
                                </a>
                            }
                            if let Some(google) = wallet.google.as_ref() {
                                <a class="btn-secondary" href={google.download_url.clone()}>
                                    {"Google Wallet"}
                                </a>
                            }
                        </div>
                    }

                    <button class="btn-link" onclick={dismiss_receipt}>{"Done"}</button>
                </section>
            }

            <section class="panel">
                <h3>{"Registered cards"}</h3>
                if *rows_loading {
                    <p class="loading-hint">{"Loading cards..."}</p>
                } else if rows.is_empty() {
                    <p class="empty-hint">{"No cards issued yet."}</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Customer"}</th>
                                <th>{"Phone"}</th>
                                <th>{"Card"}</th>
                                <th>{"Points"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(|row| {
                                let card = row.loyalty_card.as_ref();
                                html! {
                                    <tr>
                                        <td>{&row.customer.name}</td>
                                        <td>{ row.customer.phone_number.clone().unwrap_or_else(|| "—".to_string()) }</td>
                                        <td>
                                            { card.map(|c| html! { <code>{&c.token}</code> })
                                                .unwrap_or_else(|| html! { {"—"} }) }
                                        </td>
                                        <td>{ format_points(card.map(|c| c.points_balance)) }</td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::card::{Customer, LoyaltyCard};

    fn issued(customer_id: &str, token: &str, balance: i64) -> IssuedCard {
        IssuedCard {
            customer: Customer {
                id: customer_id.into(),
                name: "Dana Reyes".into(),
                phone_number: None,
            },
            loyalty_card: LoyaltyCard {
                token: token.into(),
                points_balance: balance,
                business_customer: None,
                created_at: None,
                updated_at: None,
            },
            prepared_pass_url: None,
            wallet: None,
        }
    }

    #[test]
    fn new_customers_are_prepended() {
        let rows = upsert_customer_row(&[], &issued("c-1", "CARD-7", 0));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].loyalty_card.as_ref().unwrap().token, "CARD-7");
    }

    #[test]
    fn reissue_replaces_the_existing_row() {
        let rows = upsert_customer_row(&[], &issued("c-1", "CARD-7", 0));
        let rows = upsert_customer_row(&rows, &issued("c-1", "CARD-8", 15));
        assert_eq!(rows.len(), 1);
        let card = rows[0].loyalty_card.as_ref().unwrap();
        assert_eq!(card.token, "CARD-8");
        assert_eq!(card.points_balance, 15);
    }
}
