//! Filesystem watch daemon: event debouncing, write-stability probing,
//! and the long-running event loop.

pub mod daemon;
pub mod debouncer;
pub mod stability;

pub use daemon::{WatchDaemon, WatchError};
pub use debouncer::Debouncer;
pub use stability::wait_for_stable;
