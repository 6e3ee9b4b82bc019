use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::card_service::{list_business_customers, LoyaltyCustomer};

/// Case-insensitive match on name or phone number.
pub fn filter_customers(customers: &[LoyaltyCustomer], query: &str) -> Vec<LoyaltyCustomer> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return customers.to_vec();
    }
    customers
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.phone_number
                    .as_ref()
                    .map(|p| p.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[function_component(CustomersPage)]
pub fn customers_page() -> Html {
    let customers = use_state(Vec::<LoyaltyCustomer>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let query = use_state(String::new);

    {
        let customers = customers.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match list_business_customers().await {
                    Ok(list) => {
                        log::info!("📋 Loaded {} customers", list.len());
                        let rows = list.iter().map(LoyaltyCustomer::from).collect();
                        customers.set(rows);
                    }
                    Err(e) => {
                        log::error!("❌ Customers load failed: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let visible = filter_customers(&customers, &query);

    html! {
        <div class="page customers-page">
            <header class="page-header">
                <h2>{"Customers"}</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by name or phone"
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </header>

            if *loading {
                <p class="loading-hint">{"Loading customers..."}</p>
            } else if let Some(err) = (*error).clone() {
                <p class="page-error">{err}</p>
            } else if visible.is_empty() {
                <p class="empty-hint">
                    { if query.trim().is_empty() {
                        "No customers yet. Issue a loyalty card to get started."
                    } else {
                        "No customers match that search."
                    } }
                </p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Phone"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|c| html! {
                            <tr>
                                <td>{&c.name}</td>
                                <td>{ c.phone_number.clone().unwrap_or_else(|| "—".to_string()) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LoyaltyCustomer> {
        vec![
            LoyaltyCustomer {
                id: "1".into(),
                name: "Dana Reyes".into(),
                phone_number: Some("+15551230001".into()),
            },
            LoyaltyCustomer {
                id: "2".into(),
                name: "Омар Али".into(),
                phone_number: None,
            },
        ]
    }

    #[test]
    fn empty_query_returns_everyone() {
        assert_eq!(filter_customers(&sample(), "  ").len(), 2);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let hits = filter_customers(&sample(), "dana");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn matches_phone_substring() {
        let hits = filter_customers(&sample(), "0001");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }
}
