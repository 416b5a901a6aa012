use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent};
use yew::prelude::*;

use crate::base::CURRENCY_UPDATE_EVENT;

const DEMO_STARTING_BALANCE: i32 = 163_543;

/// Current currency balance, kept in sync across components through
/// `currencyUpdate` CustomEvents and persisted in localStorage.
#[hook]
pub fn use_currency() -> UseStateHandle<i32> {
    let current_balance = use_state(|| {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item("currency").ok().flatten())
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(DEMO_STARTING_BALANCE)
    });

    {
        let current_balance = current_balance.clone();
        use_effect(move || {
            let balance = current_balance.clone();

            let listener = Closure::wrap(Box::new(move |e: CustomEvent| {
                if let Some(new_total) = e.detail().as_f64() {
                    balance.set(new_total as i32);
                    if let Some(w) = window() {
                        if let Ok(Some(storage)) = w.local_storage() {
                            let _ = storage.set_item("currency", &new_total.to_string());
                        }
                    }
                }
            }) as Box<dyn FnMut(CustomEvent)>);

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    CURRENCY_UPDATE_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        CURRENCY_UPDATE_EVENT,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    current_balance
}
