mod client;
mod http_sink;

pub use client::{ServerClientError, new_client};
pub use http_sink::HttpCommandSink;
