//! # Screen View
//!
//! What the screen looks like for a given [`ScreenState`], top to bottom: the search
//! field, the map slot and the restaurant list. Drawing it is left to a
//! [`ScreenSurface`] and a [`DetailRenderer`].

use restomap_common::location::MapRegion;
use restomap_common::restaurant::RestaurantRecord;

use crate::domain::screen::ScreenState;
use crate::ports::outbound::surface::{DetailRenderer, ScreenSurface};

pub const SEARCH_PLACEHOLDER: &str = "Search Resto here...";

/// Height of the gap drawn between two list entries.
pub const SEPARATOR_HEIGHT: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapSlot {
    Map(MapRegion),
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem<'a> {
    /// Positional key, as the list widget expects it.
    pub key: String,
    pub index: usize,
    pub record: &'a RestaurantRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView<'a> {
    pub query: &'a str,
    pub placeholder: &'static str,
    pub map: MapSlot,
    pub items: Vec<ListItem<'a>>,
}

impl<'a> ScreenView<'a> {
    pub fn compose(state: &'a ScreenState) -> Self {
        let map = match state.coordinates() {
            Some(coordinates) => MapSlot::Map(coordinates.region()),
            None => MapSlot::Loading,
        };

        let items = state
            .displayed()
            .iter()
            .enumerate()
            .map(|(index, record)| ListItem {
                key: index.to_string(),
                index,
                record,
            })
            .collect();

        Self {
            query: state.query(),
            placeholder: SEARCH_PLACEHOLDER,
            map,
            items,
        }
    }

    pub fn draw(&self, surface: &mut dyn ScreenSurface, details: &dyn DetailRenderer) {
        surface.begin_frame();
        surface.search_input(self.query, self.placeholder);

        match &self.map {
            MapSlot::Map(region) => surface.map(region),
            MapSlot::Loading => surface.loading_indicator(),
        }

        for item in &self.items {
            if item.index > 0 {
                surface.separator(SEPARATOR_HEIGHT);
            }
            details.render(item.record, item.index);
        }

        surface.end_frame(self.items.len());
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
