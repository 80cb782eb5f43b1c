use crate::core::Showcase;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole viewport as a -1..1 look input.
pub fn wire_pointer(showcase: Rc<RefCell<Showcase>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (w, h) = dom::viewport_size();
        showcase.borrow_mut().signals.set_pointer_px(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w,
            h,
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
