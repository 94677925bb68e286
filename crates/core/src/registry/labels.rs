//! Revision label sequence.
//!
//! Labels advance through the Latin alphabet (A, B, ... Z) and fall back to
//! a numbered form (A1, A2, ...) once Z is exhausted. An unparseable stored
//! label restarts the sequence at A.

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Compute the label following `current`. `None` yields the initial "A".
pub fn next_label(current: Option<&str>) -> String {
    let Some(current) = current else {
        return "A".to_string();
    };

    if current.len() == 1 {
        if let Some(idx) = LETTERS.find(current) {
            return match LETTERS.as_bytes().get(idx + 1) {
                Some(&b) => (b as char).to_string(),
                None => "A1".to_string(),
            };
        }
    }

    if let Some(n) = current.strip_prefix('A').and_then(|s| s.parse::<u32>().ok()) {
        return format!("A{}", n + 1);
    }

    "A".to_string()
}
