mod server;

pub use server::{CONFIG_ENV, ENV_PREFIX, ServerConfig};
