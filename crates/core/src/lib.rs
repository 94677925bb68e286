#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod extensions;
pub mod registry;
pub mod sync;
pub mod vault;
pub mod watch;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
