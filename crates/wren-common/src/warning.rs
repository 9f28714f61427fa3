//! Deduplicated warnings for unsupported or suspicious input.
//!
//! The style parser reports unknown keywords here and the render tree reports
//! structurally odd requests (e.g. adding a `display: none` child). Each
//! distinct message is printed once per process until [`clear_warnings`] runs.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about unsupported input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Style", "unsupported display value 'contents'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Wren {component}] ⚠ {message}").yellow());
    }
}

/// Whether `message` has already been reported for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Forget every recorded warning (call before building a new tree).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_message_once() {
        warn_once("Test", "records_each_message_once");
        assert!(has_warned("Test", "records_each_message_once"));
        assert!(!has_warned("Other", "records_each_message_once"));
    }
}
