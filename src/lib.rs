#![cfg(target_arch = "wasm32")]
use crate::core::{full_scene, LinkState, Showcase, ShowcaseConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
pub mod core;
mod dom;
mod error;
mod events;
mod frame;
mod overlay;
mod render;
mod sensors;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn schedule_loader_hide(document: &web::Document) {
    let doc = document.clone();
    let hide = Closure::once_into_js(move || overlay::hide_loader(&doc));
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.unchecked_ref(),
            constants::LOADER_HIDE_MS,
        );
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neural-link starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("neural-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #neural-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);
    schedule_loader_hide(&document);

    // Shared context for the frame loop, the mood timer and the event callbacks
    let showcase = Rc::new(RefCell::new(Showcase::new(ShowcaseConfig::default())));
    let mic: Rc<RefCell<Option<audio::MicLink>>> = Rc::new(RefCell::new(None));
    {
        let s = showcase.borrow();
        log::info!(
            "[engine] mood={} smoothing={:?} amplitude={:?}",
            s.cycler.current().name,
            s.config.smoothing,
            s.config.amplitude
        );
    }

    events::wire_pointer(showcase.clone());
    events::wire_controls(events::ControlWiring {
        document: document.clone(),
        showcase: showcase.clone(),
        mic: mic.clone(),
        audio_link: Rc::new(RefCell::new(LinkState::Idle)),
        gyro_link: Rc::new(RefCell::new(LinkState::Idle)),
    });

    let instances = full_scene(constants::LAYOUT_SEED);
    let gpu = frame::init_gpu(&canvas, &instances).await;

    frame::start_mood_timer(showcase.clone(), mic.clone(), document.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        showcase,
        mic,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
