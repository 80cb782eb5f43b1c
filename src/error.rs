use wasm_bindgen::JsValue;

/// Failure to link an optional sensor. Any of these leaves the feature off for
/// the session.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("{0} is not available in this browser")]
    Unsupported(&'static str),
    #[error("permission denied: {0}")]
    Denied(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for LinkError {
    fn from(v: JsValue) -> Self {
        LinkError::Js(format!("{:?}", v))
    }
}
