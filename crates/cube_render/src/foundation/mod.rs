//! Foundational utilities shared across the library
//!
//! Hosts the math types used by the transform pipeline and the logging
//! bootstrap helper. Nothing in here touches the GPU.

pub mod logging;
pub mod math;
