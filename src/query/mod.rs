mod input;
mod interpolate;
mod session;

pub use input::{Input, SENTINEL, parse_input};
pub use interpolate::{Estimate, InterpolationRequest, estimate};
pub use session::Session;
