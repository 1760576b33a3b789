//! AI coach chat turns: loop detection, prompts and the turn service.

pub mod loop_detector;
pub mod prompt;
pub mod service;
