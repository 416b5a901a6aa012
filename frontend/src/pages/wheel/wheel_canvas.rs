use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use shared::shared_wheel::{segment_angle, WHEEL_COLORS};

const CANVAS_SIZE: u32 = 320;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub items: Vec<String>,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let items = props.items.clone();
        let is_spinning = props.is_spinning;

        use_effect_with((rotation, items, is_spinning), move |(rotation, items, is_spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Some(context) = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
                {
                    draw_wheel(&context, *rotation, items, *is_spinning);
                }
            }
            || ()
        });
    }

    html! {
        <div class="relative w-80 h-80 mx-auto">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full h-full rounded-full shadow-2xl border-8 border-white"
            />
            // Fixed marker at the top of the ring.
            <div class="absolute left-1/2 -top-2 -translate-x-1/2 z-10 w-0 h-0
                        border-l-[12px] border-l-transparent
                        border-r-[12px] border-r-transparent
                        border-t-[20px] border-t-yellow-400 drop-shadow-lg">
            </div>
        </div>
    }
}

fn draw_wheel(context: &CanvasRenderingContext2d, rotation: f64, items: &[String], is_spinning: bool) {
    let size = CANVAS_SIZE as f64;
    let center = size / 2.0;
    let radius = center - 10.0;

    context.clear_rect(0.0, 0.0, size, size);
    context.save();

    let _ = context.translate(center, center);
    let _ = context.rotate(rotation * PI / 180.0);

    let segment_rad = segment_angle(items.len()) * PI / 180.0;
    for (index, label) in items.iter().enumerate() {
        let start = index as f64 * segment_rad;
        let end = start + segment_rad;

        context.begin_path();
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.set_fill_style_str(WHEEL_COLORS[index % WHEEL_COLORS.len()]);
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(2.0);
        context.stroke();

        // Label along the middle of the segment.
        context.save();
        let _ = context.rotate(start + segment_rad / 2.0);
        context.set_fill_style_str("#1f2937");
        context.set_font("bold 13px sans-serif");
        context.set_text_align("right");
        let _ = context.fill_text(label, radius - 14.0, 5.0);
        context.restore();
    }

    context.restore();

    // Center hub drawn unrotated.
    context.begin_path();
    let _ = context.arc(center, center, radius * 0.15, 0.0, 2.0 * PI);
    context.set_fill_style_str(if is_spinning { "#fbbf24" } else { "#ffffff" });
    context.fill();
    context.set_stroke_style_str("rgba(0, 0, 0, 0.2)");
    context.set_line_width(2.0);
    context.stroke();
}
