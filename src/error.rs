// error.rs - Engine error type
//
// Only setup can fail. A branch whose attachment index has no sample is a
// soft miss handled inside the frame, never an error.

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(thiserror::Error, Debug)]
pub enum TimelineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("host error: {0}")]
    Host(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl TimelineError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn missing_element(msg: impl Into<String>) -> Self {
        Self::MissingElement(msg.into())
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}

impl From<wasm_bindgen::JsValue> for TimelineError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Host(format!("{value:?}"))
    }
}

impl From<TimelineError> for wasm_bindgen::JsValue {
    fn from(err: TimelineError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
