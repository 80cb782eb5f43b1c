use crate::audio::MicLink;
use crate::core::{LinkState, Showcase};
use crate::{dom, overlay, sensors};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub const INIT_BUTTON: &str = "init-btn";
pub const AUDIO_BUTTON: &str = "link-audio-btn";
pub const GYRO_BUTTON: &str = "link-gyro-btn";

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub showcase: Rc<RefCell<Showcase>>,
    pub mic: Rc<RefCell<Option<MicLink>>>,
    pub audio_link: Rc<RefCell<LinkState>>,
    pub gyro_link: Rc<RefCell<LinkState>>,
}

pub fn wire_controls(w: ControlWiring) {
    wire_init(&w);
    wire_audio_link(&w);
    wire_gyro_link(&w);
}

fn wire_init(w: &ControlWiring) {
    let w = w.clone();
    let doc = w.document.clone();
    dom::add_click_listener(&doc, INIT_BUTTON, move || {
        w.showcase.borrow_mut().engage();
        overlay::enter_dashboard(&w.document);
        log::info!("[ui] link initialised");
    });
}

fn wire_audio_link(w: &ControlWiring) {
    let w = w.clone();
    let doc = w.document.clone();
    overlay::show_link_state(&doc, AUDIO_BUTTON, "AUDIO", *w.audio_link.borrow());
    dom::add_click_listener(&doc, AUDIO_BUTTON, move || {
        if !w.audio_link.borrow_mut().begin_request() {
            return;
        }
        overlay::show_link_state(&w.document, AUDIO_BUTTON, "AUDIO", LinkState::Pending);
        let w = w.clone();
        spawn_local(async move {
            let drone_hz = w.showcase.borrow().mood.drone_hz;
            match MicLink::open(drone_hz).await {
                Ok(mic) => {
                    *w.mic.borrow_mut() = Some(mic);
                    w.audio_link.borrow_mut().resolve(true);
                }
                Err(e) => {
                    log::warn!("[audio] link failed: {}", e);
                    w.audio_link.borrow_mut().resolve(false);
                    dom::alert(&format!("Audio link unavailable: {}", e));
                }
            }
            let state = *w.audio_link.borrow();
            overlay::show_link_state(&w.document, AUDIO_BUTTON, "AUDIO", state);
        });
    });
}

fn wire_gyro_link(w: &ControlWiring) {
    let w = w.clone();
    let doc = w.document.clone();
    overlay::show_link_state(&doc, GYRO_BUTTON, "GYRO", *w.gyro_link.borrow());
    dom::add_click_listener(&doc, GYRO_BUTTON, move || {
        if !w.gyro_link.borrow_mut().begin_request() {
            return;
        }
        overlay::show_link_state(&w.document, GYRO_BUTTON, "GYRO", LinkState::Pending);
        let w = w.clone();
        spawn_local(async move {
            match sensors::request_orientation_permission().await {
                Ok(()) => {
                    sensors::wire_orientation(w.showcase.clone());
                    w.gyro_link.borrow_mut().resolve(true);
                    log::info!("[gyro] orientation linked");
                }
                Err(e) => {
                    log::warn!("[gyro] link failed: {}", e);
                    w.gyro_link.borrow_mut().resolve(false);
                    dom::alert(&format!("Gyro link unavailable: {}", e));
                }
            }
            let state = *w.gyro_link.borrow();
            overlay::show_link_state(&w.document, GYRO_BUTTON, "GYRO", state);
        });
    });
}
