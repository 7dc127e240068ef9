//! # Domain Layer (Core)
//!
//! Everything the screen knows without touching the outside world.
//!
//! ## Contents
//! * **[`filter`]**: the case-insensitive name filter.
//! * **[`screen`]**: [`screen::ScreenState`] and its transition functions.
//! * **[`view`]**: the render composition derived from a state.

pub mod filter;
pub mod screen;
pub mod view;
