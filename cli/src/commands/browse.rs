use restomap_common::config::Config;
use restomap_core::application::services::screen::{RestaurantScreen, ScreenEvent, ScreenHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::adapters;
use crate::terminal::{details::RestoDetails, print, surface::TerminalSurface};

/// Typing this line instead of a query leaves the screen.
const QUIT: &str = ":q";

pub async fn browse(cfg: &Config) -> anyhow::Result<()> {
    let mut screen = RestaurantScreen::mount(
        adapters::location_provider(cfg)?,
        adapters::restaurant_source(cfg)?,
    );

    if cfg.quiet == 0 {
        print::print_status(format!(
            "Type to search, an empty line clears, {QUIT} quits"
        ));
    }

    let input = spawn_input_reader(screen.handle());
    let mut surface = TerminalSurface::new(cfg.quiet);
    let details = RestoDetails::new(cfg.quiet);

    screen.run(&mut surface, &details).await;

    surface.finish();
    input.abort();
    screen.unmount();
    Ok(())
}

/// Maps one line of search input to the event it stands for. `None` is end of input.
///
/// A trailing `\r` is dropped, so an empty line (with or without it) clears the query.
fn input_event(line: Option<&str>) -> ScreenEvent {
    match line.map(|line| line.trim_end_matches('\r')) {
        None | Some(QUIT) => ScreenEvent::Close,
        Some(query) => ScreenEvent::QueryChanged(query.to_string()),
    }
}

/// Forwards each stdin line to the screen as the new full query.
fn spawn_input_reader(handle: ScreenHandle) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let event = match lines.next_line().await {
                Ok(line) => {
                    if line.is_none() {
                        debug!("Search input closed");
                    }
                    input_event(line.as_deref())
                }
                Err(e) => {
                    error!("Failed to read search input: {e}");
                    ScreenEvent::Close
                }
            };

            let closing = matches!(event, ScreenEvent::Close);
            if handle.post(event).is_err() || closing {
                return;
            }
        }
    })
}
