pub mod client;
pub mod commands;

pub use client::CliTransport;
pub use commands::{hex_list, DisplayTarget, Invocation};
