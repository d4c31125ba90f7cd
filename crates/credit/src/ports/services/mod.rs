//! Service Ports
//!
//! Abstract interfaces for services the domain consumes.

mod clock;

pub use clock::*;
