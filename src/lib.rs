#![forbid(unsafe_code)]

pub mod build;
pub mod cli;
pub mod client;
pub mod fallback;
pub mod fetch;
pub mod formats;
pub mod logging;
pub mod render;
pub mod resolve;
pub mod richtext;
pub mod site;
pub mod youtube;
