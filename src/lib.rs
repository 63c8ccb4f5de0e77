//! Stub responses for a third-party delivery-estimate API.
//!
//! Test harnesses that would otherwise call the real ETA service use this
//! crate to obtain a canned prediction payload. The promised delivery time
//! tracks the injected clock (now + 30 minutes); every other field is a
//! fixed literal carried over from recorded production traffic.

pub mod clock;
pub mod prediction;
mod serde_time;

pub use clock::{Clock, SystemClock};
pub use prediction::{DeliveryPrediction, DeliveryRef, render_response_body};
