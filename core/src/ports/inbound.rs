//! # Inbound Ports (Driving Actors)
//!
//! The screen is driven by two kinds of input: the lifecycle (mount/unmount) and
//! text-input change events. Both go through
//! [`RestaurantScreen`](crate::application::services::screen::RestaurantScreen)
//! and its cloneable [`ScreenHandle`](crate::application::services::screen::ScreenHandle)
//! directly, so no use-case traits are declared here.
//!
//! A second front-end (a GUI shell, an HTTP bridge) would only need a
//! `ScreenHandle` to post query changes and a
//! [`ScreenSurface`](crate::ports::outbound::surface::ScreenSurface) to draw on.
