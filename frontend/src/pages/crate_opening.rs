use gloo_timers::future::TimeoutFuture;
use rand::Rng;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::reel::{Rarity, ReelItem};
use shared::shared_crate_store::{resolve_reward, CrateOpening as OpeningState, OpeningPhase};

use crate::api::{demo_crate_content, fetch_crate_content, open_crate};
use crate::base::{dispatch_currency_event, Base};
use crate::components::CrateSpinner;
use crate::styles;
use crate::Route;

/// Give the reel time to reach full speed before the landing commits,
/// even when the open response returns instantly.
const MIN_SPIN_MS: u32 = 1200;

#[derive(Properties, PartialEq)]
pub struct CrateOpeningProps {
    pub crate_guid: String,
}

#[function_component(CrateOpening)]
pub fn crate_opening(props: &CrateOpeningProps) -> Html {
    let items = use_state(Vec::<ReelItem>::new);
    let loading = use_state(|| true);
    let opening = use_state(OpeningState::new);
    let pending_balance = use_state(|| None::<i32>);
    let error_message = use_state(String::new);
    let navigator = use_navigator();

    let container_width = window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1200.0);

    {
        let items = items.clone();
        let loading = loading.clone();
        let guid = props.crate_guid.clone();
        use_effect_with(guid.clone(), move |_| {
            spawn_local(async move {
                match fetch_crate_content(&guid).await {
                    Ok(content) => items.set(content),
                    Err(err) => {
                        log::warn!("falling back to demo crate content: {}", err);
                        items.set(demo_crate_content(&guid));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let handle_spin = {
        let items = items.clone();
        let opening = opening.clone();
        let pending_balance = pending_balance.clone();
        let error_message = error_message.clone();
        let guid = props.crate_guid.clone();

        Callback::from(move |_| {
            if opening.phase != OpeningPhase::Idle || items.is_empty() {
                return;
            }
            let mut state = (*opening).clone();
            if !state.start() {
                return;
            }
            error_message.set(String::new());
            pending_balance.set(None);
            opening.set(state);

            // The reel spins immediately for perceived responsiveness;
            // the landing only commits once the reward id is known.
            let items = items.clone();
            let opening = opening.clone();
            let pending_balance = pending_balance.clone();
            let error_message = error_message.clone();
            let guid = guid.clone();
            spawn_local(async move {
                let reward = match open_crate(&guid).await {
                    Ok(response) if response.success => {
                        pending_balance.set(response.new_balance);
                        response.reward
                    }
                    Ok(response) => {
                        error_message.set(
                            response
                                .message
                                .unwrap_or_else(|| "Failed to open crate".to_string()),
                        );
                        None
                    }
                    Err(err) => {
                        log::warn!("open crate request failed, using demo reward: {}", err);
                        None
                    }
                };

                // The reel can only land on an item it is showing.
                let had_server_reward = reward.is_some();
                let reward = resolve_reward(&items, reward);
                if had_server_reward && reward.is_none() {
                    log::warn!("server reward not in crate contents, using demo reward");
                }

                // Demo fallback: without the store API, pick a reward
                // client-side so the reveal still works.
                let reward = reward.unwrap_or_else(|| {
                    let index = rand::thread_rng().gen_range(0..items.len());
                    items[index].clone()
                });

                TimeoutFuture::new(MIN_SPIN_MS).await;

                let mut state = (*opening).clone();
                if state.deliver_reward(reward) {
                    opening.set(state);
                }
            });
        })
    };

    let handle_complete = {
        let opening = opening.clone();
        let pending_balance = pending_balance.clone();
        Callback::from(move |_| {
            let mut state = (*opening).clone();
            state.complete();
            opening.set(state);
            if let Some(balance) = *pending_balance {
                dispatch_currency_event(balance);
            }
        })
    };

    let on_back = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    let spinning = opening.phase != OpeningPhase::Idle;

    html! {
        <Base>
            <div class="max-w-6xl mx-auto px-4">
                <h1 class={classes!("mb-8", styles::TEXT_H1)}>{"Open Crate"}</h1>

                if *loading {
                    <div class={styles::LOADING_SPINNER}></div>
                } else {
                    <>
                    <div class="mb-8">
                        <CrateSpinner
                            items={(*items).clone()}
                            phase={opening.phase}
                            pending_reward={opening.pending_reward.clone()}
                            container_width={container_width}
                            on_complete={handle_complete}
                        />
                    </div>

                    <div class="text-center mb-8">
                        <button
                            class={styles::BUTTON_SPIN}
                            disabled={spinning}
                            onclick={handle_spin}
                        >
                            { if spinning { "SPINNING..." } else { "SPIN" } }
                        </button>
                    </div>

                    if !error_message.is_empty() {
                        <div class={classes!("mb-6", "text-center", styles::CARD_ERROR)}>
                            { &*error_message }
                        </div>
                    }

                    if let Some(reward) = &opening.last_reward {
                        <div class="mb-8 flex justify-center">
                            <div class={classes!(
                                "px-6", "py-4", "rounded-xl", "border-2", "font-bold",
                                "text-xl", "animate-pulse",
                                styles::rarity_classes(reward.rarity),
                            )}>
                                { format!(
                                    "You won: {} ({})",
                                    reward.label,
                                    Rarity::from_wire(reward.rarity).name()
                                ) }
                            </div>
                        </div>
                    }

                    <div class="bg-black/40 rounded-lg p-6">
                        <div class="flex items-center gap-2 mb-4 text-sm text-gray-300">
                            <span>{"ℹ"}</span>
                            <span>{"By opening this set, you will receive one of these items."}</span>
                        </div>
                        <div class="grid grid-cols-2 sm:grid-cols-5 gap-2">
                            {
                                items.iter().map(|item| html! {
                                    <div key={item.id.clone()} class={classes!(
                                        "rounded", "p-2", "text-center", "border",
                                        styles::rarity_classes(item.rarity),
                                    )}>
                                        <div class="text-xs text-gray-300 truncate">{ &item.label }</div>
                                        <div class={classes!("text-xs", styles::rarity_text_class(item.rarity))}>
                                            { Rarity::from_wire(item.rarity).name() }
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    </>
                }

                <div class="fixed bottom-8 left-8">
                    <button
                        class="flex items-center justify-center text-white bg-black/60 rounded-lg p-4 border border-gray-600 hover:bg-black/80 transition-colors"
                        onclick={on_back}
                    >
                        {"←"}
                    </button>
                </div>
            </div>
        </Base>
    }
}
