#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod image_proxy;
pub mod presence;
pub mod profile;
pub mod views;
