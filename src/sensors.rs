use crate::core::Showcase;
use crate::error::LinkError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Ask for device-orientation access.
///
/// Browsers that gate the sensor expose `DeviceOrientationEvent.requestPermission`;
/// everywhere else the event is available without asking.
pub async fn request_orientation_permission() -> Result<(), LinkError> {
    let window = web::window().ok_or(LinkError::Unsupported("window"))?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent"))?;
    if ctor.is_undefined() {
        return Err(LinkError::Unsupported("device orientation"));
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))?;
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };
    let promise = request
        .call0(&ctor)?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| LinkError::Js("requestPermission did not return a promise".into()))?;
    let answer = JsFuture::from(promise)
        .await
        .map_err(|e| LinkError::Denied(format!("{:?}", e)))?;
    match answer.as_string().as_deref() {
        Some("granted") => Ok(()),
        other => Err(LinkError::Denied(format!(
            "orientation permission: {}",
            other.unwrap_or("unknown")
        ))),
    }
}

/// Publish every orientation reading into the shared input signals.
pub fn wire_orientation(showcase: Rc<RefCell<Showcase>>) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            if let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) {
                showcase
                    .borrow_mut()
                    .signals
                    .set_tilt_degrees(beta as f32, gamma as f32);
            }
        }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd
            .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
