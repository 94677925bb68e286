//! Quiet-period tracking for file events.
//!
//! CAD packages save in bursts (temp file, payload, metadata touch), so a
//! path is only handed to the registry once no event has arrived for it
//! within the configured window.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    pending: HashMap<PathBuf, Instant>,
    window: Duration,
}

impl Debouncer {
    pub fn new(window_ms: u64) -> Self {
        Self { pending: HashMap::new(), window: Duration::from_millis(window_ms) }
    }

    /// Note an event for a path, restarting its quiet period.
    pub fn record(&mut self, path: PathBuf) {
        self.pending.insert(path, Instant::now());
    }

    /// Drain all paths whose quiet period has elapsed.
    pub fn take_ready(&mut self) -> Vec<PathBuf> {
        let now = Instant::now();
        let mut ready = Vec::new();

        self.pending.retain(|path, last| {
            if now.duration_since(*last) >= self.window {
                ready.push(path.clone());
                false
            } else {
                true
            }
        });

        ready
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_path_held_until_quiet() {
        let mut debouncer = Debouncer::new(40);
        debouncer.record(PathBuf::from("/cad/a.sldprt"));

        assert!(debouncer.take_ready().is_empty());
        sleep(Duration::from_millis(50));

        let ready = debouncer.take_ready();
        assert_eq!(ready, vec![PathBuf::from("/cad/a.sldprt")]);
        assert!(debouncer.is_empty());
    }

    #[test]
    fn test_new_event_restarts_window() {
        let mut debouncer = Debouncer::new(40);
        let path = PathBuf::from("/cad/a.sldprt");

        debouncer.record(path.clone());
        sleep(Duration::from_millis(25));
        debouncer.record(path.clone());
        sleep(Duration::from_millis(25));

        assert!(debouncer.take_ready().is_empty());
        sleep(Duration::from_millis(25));
        assert_eq!(debouncer.take_ready().len(), 1);
    }

    #[test]
    fn test_paths_ready_independently() {
        let mut debouncer = Debouncer::new(40);
        debouncer.record(PathBuf::from("/cad/a.sldprt"));
        sleep(Duration::from_millis(30));
        debouncer.record(PathBuf::from("/cad/b.sldprt"));
        sleep(Duration::from_millis(15));

        let ready = debouncer.take_ready();
        assert_eq!(ready, vec![PathBuf::from("/cad/a.sldprt")]);
        assert!(!debouncer.is_empty());
    }
}
