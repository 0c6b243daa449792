//! Process-wide element ID sequence.

use log::trace;
use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of every generated element ID.
pub const ELEMENT_ID_PREFIX: &str = "m-";

static ELEMENT_ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Returns the next unused element ID (`m-1`, `m-2`, ...).
pub fn next_element_id() -> String {
    let next = ELEMENT_ID_SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1;
    trace!("event=element_id_assigned module=element id={ELEMENT_ID_PREFIX}{next}");
    format!("{ELEMENT_ID_PREFIX}{next}")
}

/// Whether an `id` attribute value names the element. Empty and `"0"` are
/// placeholders.
pub(crate) fn is_assigned_id(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
    use super::{is_assigned_id, next_element_id, ELEMENT_ID_PREFIX};

    fn sequence_number(id: &str) -> u64 {
        id.strip_prefix(ELEMENT_ID_PREFIX)
            .expect("generated id carries prefix")
            .parse()
            .expect("generated id ends with a number")
    }

    #[test]
    fn ids_are_monotonic() {
        let first = sequence_number(&next_element_id());
        let second = sequence_number(&next_element_id());
        assert!(second > first);
    }

    #[test]
    fn placeholder_ids_are_not_assigned() {
        assert!(!is_assigned_id(""));
        assert!(!is_assigned_id("0"));
        assert!(is_assigned_id("00"));
        assert!(is_assigned_id("m-4"));
    }
}
