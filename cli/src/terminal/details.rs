use restomap_common::restaurant::RestaurantRecord;
use restomap_core::ports::outbound::surface::DetailRenderer;

use crate::terminal::format::{self, Detail};
use crate::terminal::print;

const UNNAMED: &str = "Unnamed restaurant";

/// Prints one restaurant as a tree: its name, then every other field.
pub struct RestoDetails {
    quiet: u8,
}

impl RestoDetails {
    pub fn new(quiet: u8) -> Self {
        Self { quiet }
    }
}

impl DetailRenderer for RestoDetails {
    fn render(&self, record: &RestaurantRecord, index: usize) {
        let name = match record.name() {
            "" => UNNAMED,
            name => name,
        };
        print::tree_head(index, name);

        if self.quiet > 1 {
            return;
        }

        let details: Vec<Detail> = record
            .details()
            .map(|(key, value)| format::field_to_detail(key, value))
            .collect();
        print::as_tree_one_level(details);
    }
}
