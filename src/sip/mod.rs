//! SIP future-value projection

mod input;
mod projector;

pub use input::SipInput;
pub use projector::{project, SipProjection, SipYearRow};
