use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{window, CustomEvent, CustomEventInit};
use wasm_bindgen::JsValue;
use shared::constants::CURRENCY_NAME;
use crate::{Route, styles};
use crate::hooks::use_currency::use_currency;

pub const CURRENCY_UPDATE_EVENT: &str = "currencyUpdate";

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Broadcasts a new total balance to every mounted currency badge.
pub fn dispatch_currency_event(new_balance: i32) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_f64(new_balance as f64));
        if let Ok(event) = CustomEvent::new_with_event_init_dict(CURRENCY_UPDATE_EVENT, &event_init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let balance = use_currency();

    html! {
        <div class={styles::CONTAINER}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>
                            {"Crate Store"}
                        </Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>
                                {"Crates"}
                            </Link<Route>>
                            <Link<Route> to={Route::Wheel} classes={styles::NAV_LINK}>
                                {"Prize Wheel"}
                            </Link<Route>>
                            <div class={styles::CURRENCY_BADGE}>
                                <span class="text-yellow-400 text-sm font-bold">{"●"}</span>
                                <span class="text-white text-sm font-medium">
                                    {format!("{} {}", *balance, CURRENCY_NAME)}
                                </span>
                            </div>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-20 pb-8">
                { props.children.clone() }
            </main>
        </div>
    }
}
