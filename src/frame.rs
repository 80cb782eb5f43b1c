use crate::audio::MicLink;
use crate::core::{InstanceDesc, Showcase};
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub showcase: Rc<RefCell<Showcase>>,
    pub mic: Rc<RefCell<Option<MicLink>>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        if let Some(mic) = self.mic.borrow_mut().as_mut() {
            let bins = mic.sample();
            self.showcase.borrow_mut().sample_audio(bins);
        }

        let params = self.showcase.borrow_mut().frame(dt_sec);
        if let Some(report) = params.fps_report {
            log::debug!("[perf] fps={} lite={}", report.fps, !params.passes.bloom);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&params) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instances: &[InstanceDesc],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instances).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Second task: step the mood on a wall-clock interval, independent of frame rate.
pub fn start_mood_timer(
    showcase: Rc<RefCell<Showcase>>,
    mic: Rc<RefCell<Option<MicLink>>>,
    document: web::Document,
) {
    let (period, ramp) = {
        let s = showcase.borrow();
        (s.config.mood_period, s.config.drone_ramp)
    };
    overlay::show_mood(&document, showcase.borrow().cycler.current().name);
    let closure = Closure::wrap(Box::new(move || {
        let preset = showcase.borrow_mut().cycle_mood();
        overlay::show_mood(&document, preset.name);
        if let Some(m) = mic.borrow().as_ref() {
            m.ramp_drone(preset.drone_hz, ramp.as_secs_f64());
        }
        log::info!("[mood] {}", preset.name);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms(period),
        );
    }
    closure.forget();
}

fn period_ms(period: Duration) -> i32 {
    period.as_millis().min(i32::MAX as u128) as i32
}
