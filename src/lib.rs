//! mcpinger library.
//!
//! This library looks up Minecraft server status through a public status API,
//! decodes the server's MOTD color codes, and renders or forwards the result
//! to a Discord webhook.

pub mod error;
pub mod config;
pub mod address;
pub mod status;
pub mod motd;
pub mod render;
pub mod webhook;
pub mod pipeline;
pub mod utils;

pub use error::{PingerError, Result};
pub use config::Config;
pub use pipeline::Pipeline;
