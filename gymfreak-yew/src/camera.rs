//! Camera stream interop over `web-sys`
//!
//! The stream is the only externally held resource in the app: acquired once
//! when the session screen mounts and released on every exit path (finish,
//! navigation away, unmount).

use crate::config::CameraConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

/// Errors raised while acquiring the camera stream
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("Media devices are not available in this environment")]
    Unsupported,

    #[error("Camera access denied: {0}")]
    AccessDenied(String),
}

/// Single-slot handoff between the acquire future and the screen teardown
///
/// The permission prompt can outlive the session screen, so neither side
/// knows in advance who will hold the stream last. Whichever side arrives
/// second owns it: closing the slot yields the stored stream to the closer,
/// and storing into an already-closed slot hands the stream straight back so
/// the acquire path can stop it on the spot.
#[derive(Debug)]
pub struct StreamSlot<T = MediaStream> {
    state: Rc<RefCell<SlotState<T>>>,
}

#[derive(Debug)]
enum SlotState<T> {
    Open(Option<T>),
    Closed,
}

impl<T> Clone for StreamSlot<T> {
    fn clone(&self) -> Self {
        StreamSlot {
            state: self.state.clone(),
        }
    }
}

impl<T> Default for StreamSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StreamSlot<T> {
    pub fn new() -> Self {
        StreamSlot {
            state: Rc::new(RefCell::new(SlotState::Open(None))),
        }
    }

    /// Store a freshly acquired stream. Hands it back if the slot was closed
    /// while the acquisition was in flight.
    #[must_use]
    pub fn store(&self, stream: T) -> Option<T> {
        match &mut *self.state.borrow_mut() {
            SlotState::Open(held) => {
                *held = Some(stream);
                None
            }
            SlotState::Closed => Some(stream),
        }
    }

    /// Close the slot, yielding the stored stream if one already arrived.
    /// Later closes and stores are no-ops that return the stream to release.
    #[must_use]
    pub fn close(&self) -> Option<T> {
        match self.state.replace(SlotState::Closed) {
            SlotState::Open(held) => held,
            SlotState::Closed => None,
        }
    }
}

/// Request a front-facing video stream, no audio
///
/// Suspends until the platform answers the permission prompt. There is no
/// retry path: a denial is surfaced once by the caller and the screen stays
/// non-functional.
pub async fn acquire_stream(config: &CameraConfig) -> Result<MediaStream, CameraError> {
    let window = web_sys::window().ok_or(CameraError::Unsupported)?;
    let media_devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CameraError::Unsupported)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints(config));
    constraints.set_audio(&JsValue::FALSE);

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|err| CameraError::AccessDenied(js_error_message(&err)))?;

    let stream = JsFuture::from(promise)
        .await
        .map_err(|err| CameraError::AccessDenied(js_error_message(&err)))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| CameraError::Unsupported)
}

/// Bind the stream to the preview element and start inline playback
pub fn attach_stream(video: &HtmlVideoElement, stream: &MediaStream) {
    video.set_autoplay(true);
    // web-sys has no `set_plays_inline`; the `playsinline` content
    // attribute reflects the same IDL attribute.
    video
        .set_attribute("playsinline", "true")
        .expect("set playsinline attribute");
    video.set_src_object(Some(stream));
}

/// Clear the preview element
pub fn detach_stream(video: &HtmlVideoElement) {
    video.set_src_object(None);
}

/// Stop every track so the browser releases the device
pub fn release_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
    tracing::debug!("camera stream released");
}

/// `{ facingMode: "user", width: { ideal: 1280 }, height: { ideal: 720 } }`
fn video_constraints(config: &CameraConfig) -> JsValue {
    let video = js_sys::Object::new();
    set_field(&video, "facingMode", &JsValue::from_str(&config.facing_mode));
    set_field(&video, "width", &ideal(config.ideal_width));
    set_field(&video, "height", &ideal(config.ideal_height));
    video.into()
}

fn ideal(value: u32) -> JsValue {
    let range = js_sys::Object::new();
    set_field(&range, "ideal", &JsValue::from_f64(f64::from(value)));
    range.into()
}

fn set_field(target: &js_sys::Object, key: &str, value: &JsValue) {
    // Reflect::set on a fresh plain object cannot fail
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).unwrap_throw();
}

fn js_error_message(err: &JsValue) -> String {
    // getUserMedia rejects with a DOMException, which is not a JS string
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        return exception.message();
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
