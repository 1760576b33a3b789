//! Application services composing the vendor and memory ports.

pub mod profile;
pub mod token;
pub mod user;
