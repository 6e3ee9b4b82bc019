use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::transaction::TransactionRecord;
use crate::services::transaction_service::list_transactions;

pub struct UseTransactionsHandle {
    pub transactions: UseStateHandle<Vec<TransactionRecord>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,

    pub refresh: Callback<()>,
    /// Optimistic insert at the top of the list after a checkout.
    pub prepend: Callback<TransactionRecord>,
}

async fn load(
    mounted: &Rc<RefCell<bool>>,
    transactions: &UseStateHandle<Vec<TransactionRecord>>,
    loading: &UseStateHandle<bool>,
    error: &UseStateHandle<Option<String>>,
) {
    let result = list_transactions().await;
    if !*mounted.borrow() {
        return;
    }
    match result {
        Ok(list) => {
            log::info!("📋 Loaded {} transactions", list.len());
            transactions.set(list);
            error.set(None);
        }
        Err(e) => {
            log::error!("❌ Transactions load failed: {}", e);
            error.set(Some(e));
        }
    }
    loading.set(false);
}

#[hook]
pub fn use_transactions() -> UseTransactionsHandle {
    let transactions = use_state(Vec::<TransactionRecord>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let mounted = use_mut_ref(|| true);

    {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    load(&mounted, &transactions, &loading, &error).await;
                });
            }
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    let refresh = {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let mounted = mounted.clone();

        Callback::from(move |_| {
            let transactions = transactions.clone();
            let loading = loading.clone();
            let error = error.clone();
            let mounted = mounted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                load(&mounted, &transactions, &loading, &error).await;
            });
        })
    };

    let prepend = {
        let transactions = transactions.clone();

        Callback::from(move |record: TransactionRecord| {
            let mut list = (*transactions).clone();
            list.insert(0, record);
            transactions.set(list);
        })
    };

    UseTransactionsHandle {
        transactions,
        loading,
        error,
        refresh,
        prepend,
    }
}
