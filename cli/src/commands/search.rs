use std::time::Duration;

use restomap_common::config::Config;
use restomap_core::application::services::screen::{RestaurantScreen, ScreenEvent};
use tracing::warn;

use crate::adapters;
use crate::terminal::{details::RestoDetails, surface::TerminalSurface};

/// Draws a single frame once both flows have reported back (or `settle_timeout` ran out).
pub async fn search(query: String, settle_timeout: Duration, cfg: &Config) -> anyhow::Result<()> {
    let mut screen = RestaurantScreen::mount(
        adapters::location_provider(cfg)?,
        adapters::restaurant_source(cfg)?,
    );

    if !screen.settle(settle_timeout).await {
        warn!("Showing what was loaded so far");
    }

    screen.dispatch(ScreenEvent::QueryChanged(query));

    let mut surface = TerminalSurface::new(cfg.quiet);
    screen.view().draw(&mut surface, &RestoDetails::new(cfg.quiet));
    surface.finish();

    screen.unmount();
    Ok(())
}
