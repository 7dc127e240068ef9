use std::sync::Arc;

use restomap_common::restaurant::RestaurantRecord;

/// Narrows `canonical` to the records whose name contains `query`, ignoring case.
///
/// An empty query returns `canonical` itself (same allocation). Matches keep their
/// relative order.
pub fn filter(query: &str, canonical: &Arc<[RestaurantRecord]>) -> Arc<[RestaurantRecord]> {
    if query.is_empty() {
        return Arc::clone(canonical);
    }

    let needle: String = query.to_uppercase();
    canonical
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

fn matches(record: &RestaurantRecord, upper_needle: &str) -> bool {
    record.name().to_uppercase().contains(upper_needle)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
