//! Widget implementations

pub mod model_selector;
