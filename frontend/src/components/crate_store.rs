use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::shared_crate_store::CrateInfo;

use crate::api::{demo_crates, fetch_owned_crates};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CrateStoreProps {
    pub on_view_crate: Callback<CrateInfo>,
    #[prop_or_default]
    pub on_buy_success: Option<Callback<()>>,
}

/// Storefront grid: every crate with its price, a View button that
/// opens the detail panel and a Buy button with a simulated purchase.
#[function_component(CrateStore)]
pub fn crate_store(props: &CrateStoreProps) -> Html {
    let crates = use_state(Vec::<CrateInfo>::new);
    let loading = use_state(|| true);
    let buying = use_state(|| None::<String>);
    let buy_message = use_state(String::new);

    {
        let crates = crates.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_owned_crates().await {
                    Ok(list) => crates.set(list),
                    Err(err) => {
                        // The store API is an external collaborator;
                        // without it the demo catalog is shown.
                        log::warn!("falling back to demo crates: {}", err);
                        crates.set(demo_crates());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let handle_buy = {
        let buying = buying.clone();
        let buy_message = buy_message.clone();
        let on_buy_success = props.on_buy_success.clone();
        Callback::from(move |crate_info: CrateInfo| {
            if buying.is_some() {
                return;
            }
            buying.set(Some(crate_info.guid.clone()));
            buy_message.set("Processing purchase...".to_string());

            // Purchase is mocked client-side in this demo.
            let buying = buying.clone();
            let buy_message = buy_message.clone();
            let on_buy_success = on_buy_success.clone();
            Timeout::new(2000, move || {
                buy_message.set("Purchase successful!".to_string());
                buying.set(None);
                if let Some(callback) = on_buy_success {
                    callback.emit(());
                }
                let buy_message = buy_message.clone();
                Timeout::new(3000, move || buy_message.set(String::new())).forget();
            })
            .forget();
        })
    };

    if *loading {
        return html! {
            <div class="p-6 max-w-6xl mx-auto">
                <h1 class={styles::TEXT_H1}>{"Open Crates"}</h1>
                <p class={classes!("mb-6", styles::TEXT_BODY)}>
                    {"Purchase and open exclusive crates to unlock rare items and rewards!"}
                </p>
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        };
    }

    html! {
        <div class="p-6 max-w-6xl mx-auto">
            <h1 class={styles::TEXT_H1}>{"Open Crates"}</h1>
            <p class={classes!("mb-6", styles::TEXT_BODY)}>
                {"Purchase and open exclusive crates to unlock rare items and rewards!"}
            </p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {
                    crates.iter().map(|crate_info| {
                        let is_buying = buying.as_deref() == Some(crate_info.guid.as_str());
                        let on_view = {
                            let on_view_crate = props.on_view_crate.clone();
                            let crate_info = crate_info.clone();
                            Callback::from(move |_| on_view_crate.emit(crate_info.clone()))
                        };
                        let on_buy = {
                            let handle_buy = handle_buy.clone();
                            let crate_info = crate_info.clone();
                            Callback::from(move |_| handle_buy.emit(crate_info.clone()))
                        };
                        html! {
                            <div key={crate_info.guid.clone()} class={styles::CARD_HOVER}>
                                <div class="w-28 h-28 mb-4 rounded-lg bg-gray-800 flex items-center justify-center text-4xl">
                                    {"📦"}
                                </div>
                                <span class="bg-blue-700 text-xs px-3 py-1 rounded-full mb-2">
                                    { &crate_info.name }
                                </span>
                                <div class="flex items-center gap-2 mb-2">
                                    <span class="text-green-400 font-semibold">{"Price:"}</span>
                                    <span>{ &crate_info.price }</span>
                                </div>
                                <div class="flex items-center gap-2 mb-4">
                                    <span class="text-yellow-400 font-semibold">{"Items:"}</span>
                                    <span>{ crate_info.item_count }</span>
                                </div>
                                <div class="flex gap-2 w-full">
                                    <button class={styles::BUTTON_VIEW} onclick={on_view}>
                                        {"View"}
                                    </button>
                                    <button class={styles::BUTTON_BUY} disabled={is_buying} onclick={on_buy}>
                                        { if is_buying { "Buying..." } else { "Buy" } }
                                    </button>
                                </div>
                                if is_buying && !buy_message.is_empty() {
                                    <div class="mt-4 text-center text-lg font-bold text-yellow-400 w-full bg-gray-800 rounded p-2 shadow">
                                        { &*buy_message }
                                    </div>
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
