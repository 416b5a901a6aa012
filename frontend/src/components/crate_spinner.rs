use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use shared::constants::{CARD_MARGIN, CARD_WIDTH, TOTAL_CARD_WIDTH};
use shared::reel::{Rarity, ReelAnimator, ReelConfig, ReelItem, Tick};
use shared::shared_crate_store::OpeningPhase;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CrateSpinnerProps {
    /// The distinct prizes in the crate, in display order.
    pub items: Vec<ReelItem>,
    pub phase: OpeningPhase,
    /// The reward chosen by the server; required before the reel can
    /// commit to a landing.
    pub pending_reward: Option<ReelItem>,
    #[prop_or(1200.0)]
    pub container_width: f64,
    pub on_complete: Callback<()>,
}

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule_frame(raf_id: &Rc<RefCell<Option<i32>>>, closure_ref: &RafClosure) {
    if let Some(window) = web_sys::window() {
        if let Some(callback) = closure_ref.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                *raf_id.borrow_mut() = Some(id);
            }
        }
    }
}

/// The reel strip. Owns a [`ReelAnimator`] and drives it from a
/// `requestAnimationFrame` loop; the page controls the phase through
/// props and learns about the landing through `on_complete`.
#[function_component(CrateSpinner)]
pub fn crate_spinner(props: &CrateSpinnerProps) -> Html {
    let animator = use_mut_ref(|| None::<ReelAnimator>);
    let loop_closure: RafClosure = use_mut_ref(|| None);
    let raf_id = use_mut_ref(|| None::<i32>);
    let last_frame_ms = use_mut_ref(|| None::<f64>);
    let offset = use_state(|| 0.0f64);
    let landed_index = use_state(|| None::<usize>);

    // Drive the animator from phase changes.
    {
        let animator = animator.clone();
        let loop_closure = loop_closure.clone();
        let raf_id = raf_id.clone();
        let last_frame_ms = last_frame_ms.clone();
        let offset = offset.clone();
        let landed_index = landed_index.clone();
        let on_complete = props.on_complete.clone();
        let reward_id = props.pending_reward.as_ref().map(|r| r.id.clone());

        use_effect_with(
            (props.phase, reward_id, props.items.clone(), props.container_width),
            move |(phase, reward_id, items, container_width)| {
                match phase {
                    OpeningPhase::Spinning => {
                        let config = ReelConfig {
                            viewport_center: container_width / 2.0,
                            ..ReelConfig::default()
                        };
                        // A previous spin's frame must not fire into the
                        // replaced closure.
                        if let Some(id) = raf_id.borrow_mut().take() {
                            if let Some(window) = web_sys::window() {
                                let _ = window.cancel_animation_frame(id);
                            }
                        }
                        match ReelAnimator::new(config, items.clone()) {
                            Ok(mut reel) => {
                                reel.start_spin();
                                *animator.borrow_mut() = Some(reel);
                                *last_frame_ms.borrow_mut() = None;
                                offset.set(0.0);
                                landed_index.set(None);

                                let callback = {
                                    let animator = animator.clone();
                                    let loop_closure = loop_closure.clone();
                                    let raf_id = raf_id.clone();
                                    let last_frame_ms = last_frame_ms.clone();
                                    let offset = offset.clone();
                                    let landed_index = landed_index.clone();
                                    let on_complete = on_complete.clone();
                                    Closure::wrap(Box::new(move || {
                                        let now = js_sys::Date::now();
                                        let delta = last_frame_ms
                                            .borrow()
                                            .map(|previous| now - previous)
                                            .unwrap_or(0.0);
                                        *last_frame_ms.borrow_mut() = Some(now);

                                        let step = {
                                            let mut guard = animator.borrow_mut();
                                            guard.as_mut().map(|reel| {
                                                (reel.on_tick(delta), reel.offset(), reel.marker_index())
                                            })
                                        };
                                        match step {
                                            Some((Tick::Running, current, _)) => {
                                                offset.set(current);
                                                schedule_frame(&raf_id, &loop_closure);
                                            }
                                            Some((Tick::Landed, current, marker)) => {
                                                offset.set(current);
                                                landed_index.set(Some(marker));
                                                *raf_id.borrow_mut() = None;
                                                on_complete.emit(());
                                            }
                                            _ => {
                                                *raf_id.borrow_mut() = None;
                                            }
                                        }
                                    }) as Box<dyn FnMut()>)
                                };
                                *loop_closure.borrow_mut() = Some(callback);
                                schedule_frame(&raf_id, &loop_closure);
                            }
                            Err(err) => log::error!("failed to build reel: {}", err),
                        }
                    }
                    OpeningPhase::Stopping => {
                        if let Some(reel) = animator.borrow_mut().as_mut() {
                            if let Some(id) = reward_id {
                                if let Err(err) = reel.begin_stop(id) {
                                    log::error!("failed to commit landing: {}", err);
                                }
                            }
                        }
                    }
                    OpeningPhase::Idle => {}
                }
                || ()
            },
        );
    }

    // Cancel the frame loop and the animator when the view unmounts.
    {
        let animator = animator.clone();
        let raf_id = raf_id.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(id) = raf_id.borrow_mut().take() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
                if let Some(reel) = animator.borrow_mut().as_mut() {
                    reel.cancel();
                }
            }
        });
    }

    let tile_count = animator
        .borrow()
        .as_ref()
        .map(|reel| reel.tile_count())
        .unwrap_or(ReelConfig::default().max_full_cycles as usize + 2);
    let center_index =
        ((*offset + props.container_width / 2.0) / TOTAL_CARD_WIDTH).floor() as usize;
    let spinning = props.phase != OpeningPhase::Idle;

    html! {
        <div class={styles::REEL_FRAME}>
            <div class="absolute inset-0 bg-gradient-to-r from-yellow-500/10 via-transparent to-yellow-500/10 pointer-events-none"></div>
            <div class={styles::REEL_MARKER}></div>
            <div
                class={styles::REEL_STRIP}
                style={format!("transform: translateX(-{}px); will-change: transform;", *offset)}
            >
                {
                    (0..tile_count).flat_map(|tile| {
                        props.items.iter().enumerate().map(move |(i, item)| (tile * props.items.len() + i, item))
                    }).map(|(idx, item)| {
                        let is_winning = *landed_index == Some(idx) && props.phase == OpeningPhase::Idle;
                        let is_center = spinning && idx == center_index;
                        html! {
                            <div
                                key={format!("{}-{}", item.id, idx)}
                                class={classes!(
                                    "flex-shrink-0", "h-56", "transition-all", "duration-500",
                                    is_winning.then_some("scale-110 drop-shadow-2xl"),
                                    is_center.then_some("scale-105"),
                                )}
                                style={format!("width: {}px; margin: 0 {}px;", CARD_WIDTH, CARD_MARGIN)}
                            >
                                <div class={classes!(
                                    "relative", "h-full", "rounded-xl", "p-4", "border-2",
                                    "transition-all", "duration-500",
                                    styles::rarity_classes(item.rarity),
                                    is_winning.then_some("border-yellow-400 ring-4 ring-yellow-400/50 animate-pulse"),
                                    is_center.then_some("border-white/50 bg-white/5 shadow-lg"),
                                )}>
                                    <div class="relative text-center h-full flex flex-col justify-center">
                                        <div class="w-32 h-32 mx-auto mb-3 bg-gray-800/80 rounded-xl flex items-center justify-center">
                                            {
                                                if let Some(image) = &item.image {
                                                    html! { <img src={image.clone()} alt={item.label.clone()} class="w-28 h-28 object-contain" /> }
                                                } else {
                                                    html! { <div class="w-28 h-28 bg-gray-700 rounded"></div> }
                                                }
                                            }
                                        </div>
                                        <div class={classes!("font-bold", "text-sm", "mb-1", styles::rarity_text_class(item.rarity))}>
                                            { Rarity::from_wire(item.rarity).name() }
                                        </div>
                                        <div class="text-sm text-gray-300 truncate px-2 font-medium">
                                            { &item.label }
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class={styles::REEL_FADE_LEFT}></div>
            <div class={styles::REEL_FADE_RIGHT}></div>
        </div>
    }
}
