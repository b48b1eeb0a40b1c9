//! The groups published on the college schedule page.
//!
//! The catalog is fixed: it does not depend on the week being served or on the
//! request, and subject columns on the page are laid out in this order.

pub const GROUP_CATALOG: [&str; 9] = [
    "1 ТС-1", "1 ТС-2", "2 ТС-1", "2 ТС-2", "3 ТС-1", "3 ТС-2", "3 ТС-3", "4 ТС-1", "4 ТС-2",
];

/// Returns the catalog as owned strings, ready for a response body.
pub fn groups() -> Vec<String> {
    GROUP_CATALOG.iter().map(|g| g.to_string()).collect()
}

/// Looks up the group for a zero-based subject column slot.
pub fn group_at(slot: usize) -> Option<&'static str> {
    GROUP_CATALOG.get(slot).copied()
}
