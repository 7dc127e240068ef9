use colored::*;
use restomap_common::location::MapRegion;
use restomap_core::ports::outbound::surface::ScreenSurface;
use tracing::Span;

use crate::rprint;
use crate::terminal::{colors, format, print, spinner};

/// Separator units drawn as one blank row.
const SEPARATOR_UNITS_PER_ROW: u16 = 20;
const KEY_WIDTH: usize = 6;

/// Blank rows for a separator of `height` units; never less than one.
fn separator_rows(height: u16) -> u16 {
    (height / SEPARATOR_UNITS_PER_ROW).max(1)
}

/// Draws frames as blocks of terminal lines.
///
/// The map slot becomes a status line once a region is known; until then it is the
/// spinner, which keeps running across frames instead of being restarted on each one.
pub struct TerminalSurface {
    quiet: u8,
    loading: Option<Span>,
    query: String,
    last_frame_empty: bool,
}

impl TerminalSurface {
    pub fn new(quiet: u8) -> Self {
        Self {
            quiet,
            loading: None,
            query: String::new(),
            last_frame_empty: false,
        }
    }

    /// Stops the loading indicator if it is still running.
    pub fn finish(&mut self) {
        self.loading = None;
    }
}

impl ScreenSurface for TerminalSurface {
    fn begin_frame(&mut self) {
        if self.quiet == 0 {
            rprint!();
        }
        print::header("restaurants", self.quiet);
    }

    fn search_input(&mut self, query: &str, placeholder: &str) {
        self.query = query.to_string();
        if self.quiet > 1 {
            return;
        }

        let value: ColoredString = if query.is_empty() {
            placeholder.color(colors::PLACEHOLDER).italic()
        } else {
            format!("\"{query}\"").color(colors::ACCENT)
        };
        print::aligned_line("Search", KEY_WIDTH, value);
    }

    fn map(&mut self, region: &MapRegion) {
        self.loading = None;
        if self.quiet > 1 {
            return;
        }

        let value = format::region_to_string(region).color(colors::COORDINATES);
        print::aligned_line("Map", KEY_WIDTH, value);
    }

    fn loading_indicator(&mut self) {
        if self.quiet > 1 {
            return;
        }
        if self.loading.is_none() {
            self.loading = Some(spinner::start_loading_indicator());
        }
    }

    fn separator(&mut self, height: u16) {
        for _ in 0..separator_rows(height) {
            rprint!();
        }
    }

    fn end_frame(&mut self, item_count: usize) {
        self.last_frame_empty = item_count == 0;
        if self.last_frame_empty {
            print::no_results(&self.query);
        }
        if self.quiet > 0 {
            return;
        }

        let unit = if item_count == 1 { "restaurant" } else { "restaurants" };
        let summary = format!("{} {unit} shown", item_count.to_string().bold().green());
        print::fat_separator();
        print::centerln(&summary);
        if !self.query.is_empty() {
            print::centerln(&format!("{}", "Enter an empty line to clear the search".dimmed()));
        }
    }
}
