use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}

/// The small indeterminate indicator shown in place of the map.
///
/// It spins for as long as the returned span is alive.
pub fn start_loading_indicator() -> Span {
    let span = info_span!("locating", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&format!("{}", "Waiting for your location...".italic().white()));
    // The bar is shown on the span's first entry and lives until the span closes.
    span.in_scope(|| {});
    span
}
