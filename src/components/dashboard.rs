use yew::prelude::*;

use crate::hooks::{use_dashboard_details, use_dashboard_metrics};
use crate::models::dashboard::StationReadiness;
use crate::utils::format::{format_currency, format_date, format_delta, format_number};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let metrics = use_dashboard_metrics();
    let details = use_dashboard_details();

    let refresh = {
        let refresh_metrics = metrics.refresh.clone();
        let refresh_details = details.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            refresh_metrics.emit(());
            refresh_details.emit(());
        })
    };

    let kpi_cards = metrics.metrics.as_ref().map(|m| {
        let cards = m.kpi_pairs().into_iter().map(|(label, value, delta)| {
            html! {
                <div class="kpi-card">
                    <span class="kpi-label">{label}</span>
                    <span class="kpi-value">{format_number(value)}</span>
                    <span class="kpi-delta">{format_delta(delta)}</span>
                </div>
            }
        });
        html! { <div class="kpi-grid">{ for cards }</div> }
    });

    let readiness_rows = |stations: &[StationReadiness]| {
        stations
            .iter()
            .map(|s| {
                let slot = s.prepared_slot.as_ref();
                html! {
                    <tr>
                        <td>{&s.name}</td>
                        <td>
                            <span class={classes!("status-pill", s.status.clone())}>
                                {&s.status}
                            </span>
                        </td>
                        <td>
                            { slot.map(|p| p.customer.clone()).unwrap_or_else(|| "—".to_string()) }
                        </td>
                        <td>{ format_date(s.updated.as_deref()) }</td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="page dashboard-page">
            <header class="page-header">
                <h2>{"Dashboard"}</h2>
                <button class="btn-secondary" onclick={refresh} disabled={*metrics.loading}>
                    { if *metrics.loading { "Refreshing..." } else { "Refresh" } }
                </button>
            </header>

            if let Some(err) = (*metrics.error).clone() {
                <p class="page-error">{err}</p>
            }

            { kpi_cards.unwrap_or_default() }

            if *details.loading {
                <p class="loading-hint">{"Loading activity..."}</p>
            } else if let Some(err) = (*details.error).clone() {
                <p class="page-error">{err}</p>
            } else if let Some(data) = details.details.as_ref() {
                <div class="dashboard-panels">
                    <section class="panel">
                        <h3>{"Station readiness"}</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Station"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Prepared for"}</th>
                                    <th>{"Updated"}</th>
                                </tr>
                            </thead>
                            <tbody>{ readiness_rows(&data.station_readiness) }</tbody>
                        </table>
                    </section>

                    <section class="panel">
                        <h3>{"Revenue trend"}</h3>
                        <ul class="trend-list">
                            { for data.revenue_trend.iter().map(|point| html! {
                                <li>
                                    <span class="trend-date">{&point.date}</span>
                                    <span class="trend-total">{format_currency(Some(point.total))}</span>
                                </li>
                            }) }
                        </ul>
                    </section>

                    <section class="panel">
                        <h3>{"Recent transactions"}</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"When"}</th>
                                    <th>{"Customer"}</th>
                                    <th>{"Station"}</th>
                                    <th>{"Amount"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for data.recent_transactions.iter().map(|tx| {
                                    let customer = if tx.customer.is_empty() {
                                        "Guest checkout".to_string()
                                    } else {
                                        tx.customer.clone()
                                    };
                                    let station = if tx.station.is_empty() {
                                        "—".to_string()
                                    } else {
                                        tx.station.clone()
                                    };
                                    html! {
                                        <tr>
                                            <td>{ format_date(tx.created_at.as_deref()) }</td>
                                            <td>{customer}</td>
                                            <td>{station}</td>
                                            <td>{ format_currency(Some(tx.amount)) }</td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </section>

                    <section class="panel">
                        <h3>{"Top customers"}</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Customer"}</th>
                                    <th>{"Visits"}</th>
                                    <th>{"Points"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for data.top_customers.iter().map(|c| html! {
                                    <tr>
                                        <td>{&c.name}</td>
                                        <td>{c.visits}</td>
                                        <td>{c.points}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </section>
                </div>
            }
        </div>
    }
}
