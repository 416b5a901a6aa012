mod wheel_canvas;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::constants::{WHEEL_MAX_ITEMS, WHEEL_MIN_ITEMS, WHEEL_SPIN_DURATION_MS};
use shared::reel::ease_out_cubic;
use shared::shared_wheel::{final_angle, sample_rotation, winner_index};

use crate::base::Base;
use crate::styles;
use wheel_canvas::WheelCanvas;

const DEFAULT_ITEMS: [&str; 8] = [
    "Pizza Party", "Movie Night", "Ice Cream", "Game Time",
    "Book Store", "Park Visit", "Art Supplies", "Music Concert",
];

/// Stand-alone prize wheel: players edit the entry list and spin for a
/// random winner. Winner selection is client-side; this widget is
/// unrelated to the crate store API.
#[function_component(Wheel)]
pub fn wheel() -> Html {
    let items = use_state(|| DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    let new_item = use_state(String::new);
    let rotation = use_state(|| 0.0f64);
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<String>);
    let status_message = use_state(String::new);

    let add_item = {
        let items = items.clone();
        let new_item = new_item.clone();
        let status_message = status_message.clone();
        Callback::from(move |_| {
            let entry = new_item.trim().to_string();
            if entry.is_empty() {
                return;
            }
            if items.len() >= WHEEL_MAX_ITEMS {
                status_message.set(format!("Maximum {} items allowed!", WHEEL_MAX_ITEMS));
                return;
            }
            let mut updated = (*items).clone();
            updated.push(entry);
            items.set(updated);
            new_item.set(String::new());
            status_message.set(String::new());
        })
    };

    let on_input = {
        let new_item = new_item.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_item.set(input.value());
            }
        })
    };

    let remove_item = {
        let items = items.clone();
        let status_message = status_message.clone();
        let is_spinning = is_spinning.clone();
        Callback::from(move |index: usize| {
            if *is_spinning {
                return;
            }
            if items.len() <= WHEEL_MIN_ITEMS {
                status_message.set(format!("Need at least {} items to spin!", WHEEL_MIN_ITEMS));
                return;
            }
            let mut updated = (*items).clone();
            updated.remove(index);
            items.set(updated);
            status_message.set(String::new());
        })
    };

    let spin = {
        let items = items.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        Callback::from(move |_| {
            if *is_spinning || items.len() < WHEEL_MIN_ITEMS {
                return;
            }
            is_spinning.set(true);
            winner.set(None);

            let total_rotation = sample_rotation(&mut rand::thread_rng());
            let start_rotation = *rotation;
            let end_rotation = start_rotation + total_rotation;
            let start_time = js_sys::Date::now();
            let entries = (*items).clone();

            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let winner = winner.clone();

            let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let scheduler = frame.clone();
            *scheduler.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let elapsed = js_sys::Date::now() - start_time;
                let progress = (elapsed / WHEEL_SPIN_DURATION_MS).min(1.0);
                let eased = ease_out_cubic(progress);
                rotation.set(start_rotation + total_rotation * eased);

                if progress < 1.0 {
                    if let Some(window) = web_sys::window() {
                        if let Some(callback) = frame.borrow().as_ref() {
                            let _ = window
                                .request_animation_frame(callback.as_ref().unchecked_ref());
                        }
                    }
                } else {
                    // Land on the closed-form rotation, not the eased one.
                    rotation.set(end_rotation);
                    let index = winner_index(final_angle(end_rotation), entries.len());
                    winner.set(Some(entries[index].clone()));
                    is_spinning.set(false);
                }
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                if let Some(callback) = scheduler.borrow().as_ref() {
                    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                }
            }
        })
    };

    let reset = {
        let rotation = rotation.clone();
        let winner = winner.clone();
        let is_spinning = is_spinning.clone();
        Callback::from(move |_| {
            if *is_spinning {
                return;
            }
            rotation.set(0.0);
            winner.set(None);
        })
    };

    html! {
        <Base>
            <div class="max-w-4xl mx-auto px-4">
                <h1 class={classes!("mb-8", "text-center", styles::TEXT_H1)}>{"Prize Wheel"}</h1>

                <div class="grid lg:grid-cols-2 gap-8 items-start">
                    <div class="flex flex-col items-center">
                        <WheelCanvas
                            rotation={*rotation}
                            items={(*items).clone()}
                            is_spinning={*is_spinning}
                        />

                        <div class="flex gap-4 mt-8">
                            <button
                                class={styles::BUTTON_SPIN}
                                disabled={*is_spinning || items.len() < WHEEL_MIN_ITEMS}
                                onclick={spin}
                            >
                                { if *is_spinning { "SPINNING..." } else { "SPIN" } }
                            </button>
                            <button class={styles::BUTTON_PRIMARY} disabled={*is_spinning} onclick={reset}>
                                {"Reset"}
                            </button>
                        </div>

                        if let Some(winner) = &*winner {
                            <div class="mt-6 px-6 py-4 rounded-xl border-2 border-yellow-400 bg-yellow-900/20 font-bold text-xl animate-pulse">
                                { format!("🎉 You won: {}!", winner) }
                            </div>
                        }
                    </div>

                    <div class={styles::CARD}>
                        <h2 class={classes!("mb-4", styles::TEXT_H2)}>{"Wheel Items"}</h2>

                        <div class="flex gap-2 mb-4">
                            <input
                                class={styles::INPUT}
                                placeholder="Add an item..."
                                value={(*new_item).clone()}
                                oninput={on_input}
                            />
                            <button class={styles::BUTTON_PRIMARY} onclick={add_item}>{"Add"}</button>
                        </div>

                        if !status_message.is_empty() {
                            <p class={classes!("mb-4", styles::TEXT_ERROR)}>{ &*status_message }</p>
                        }

                        <ul class="space-y-2">
                            {
                                items.iter().enumerate().map(|(index, item)| {
                                    let on_remove = {
                                        let remove_item = remove_item.clone();
                                        Callback::from(move |_| remove_item.emit(index))
                                    };
                                    html! {
                                        <li key={format!("{}-{}", index, item)}
                                            class="flex items-center justify-between bg-gray-800 rounded-lg px-4 py-2">
                                            <span>{ item }</span>
                                            <button
                                                class="text-red-400 hover:text-red-300 transition-colors"
                                                onclick={on_remove}
                                            >
                                                {"✕"}
                                            </button>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                        <p class={classes!("mt-4", styles::TEXT_SMALL)}>
                            { format!("{} to {} items.", WHEEL_MIN_ITEMS, WHEEL_MAX_ITEMS) }
                        </p>
                    </div>
                </div>
            </div>
        </Base>
    }
}
