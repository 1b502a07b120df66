mod data;
mod latency;

pub use data::*;
pub use latency::*;
