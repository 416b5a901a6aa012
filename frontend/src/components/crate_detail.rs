use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::reel::{Rarity, ReelItem};
use shared::shared_crate_store::CrateInfo;

use crate::api::{demo_crate_content, fetch_crate_content};
use crate::styles;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CrateDetailProps {
    pub crate_info: CrateInfo,
    pub on_close: Callback<()>,
}

/// Contents panel for one crate: every item the crate can drop, with
/// rarity tiers, plus the jump-off point to the opening page.
#[function_component(CrateDetail)]
pub fn crate_detail(props: &CrateDetailProps) -> Html {
    let items = use_state(Vec::<ReelItem>::new);
    let loading = use_state(|| true);
    let navigator = use_navigator();

    {
        let items = items.clone();
        let loading = loading.clone();
        let guid = props.crate_info.guid.clone();
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

    let on_open = {
        let guid = props.crate_info.guid.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::CrateOpening { guid: guid.clone() });
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes!("max-w-3xl", "mx-auto", styles::CARD)}>
            <div class="flex items-center justify-between mb-4">
                <h2 class={styles::TEXT_H2}>{ &props.crate_info.name }</h2>
                <button class={styles::BUTTON_PRIMARY} onclick={on_close}>{"Back"}</button>
            </div>
            <div class="flex items-center gap-2 mb-4 text-sm text-gray-300">
                <span>{"ℹ"}</span>
                <span>{"By opening this set, you will receive one of these items."}</span>
            </div>

            if *loading {
                <div class={styles::LOADING_SPINNER}></div>
            } else {
                <>
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-2 mb-6">
                    {
                        items.iter().map(|item| html! {
                            <div key={item.id.clone()} class={classes!(
                                "rounded", "p-2", "text-center", "border",
                                styles::rarity_classes(item.rarity),
                            )}>
                                <div class="w-16 h-16 mx-auto mb-2 bg-gray-800 rounded flex items-center justify-center">
                                    {
                                        if let Some(image) = &item.image {
                                            html! { <img src={image.clone()} alt={item.label.clone()} class="w-12 h-12 object-contain" /> }
                                        } else {
                                            html! { <div class="w-12 h-12 bg-gray-700 rounded"></div> }
                                        }
                                    }
                                </div>
                                <div class="text-xs text-gray-300 truncate">{ &item.label }</div>
                                <div class={classes!("text-xs", "truncate", styles::rarity_text_class(item.rarity))}>
                                    { Rarity::from_wire(item.rarity).name() }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="text-center">
                    <button class={styles::BUTTON_SPIN} onclick={on_open}>{"OPEN CRATE"}</button>
                </div>
                </>
            }
        </div>
    }
}
