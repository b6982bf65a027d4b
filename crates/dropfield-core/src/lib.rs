//! Component model for the **dropfield** widgets.
//!
//! `dropfield-core` provides the traits and types every dropfield widget is
//! built on. The design follows the [Elm Architecture]: a widget is a
//! [`Component`] with an **update -> view** cycle, and everything it wants the
//! host to know about is returned as a message inside a [`Command`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Messages handed back to the host after an update |
//! | [`Propagation`] / [`Hook`] | Cancelable host hooks run before a component reacts |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! dropfield has no event loop of its own. The host reads terminal events
//! however it likes, wraps them in component messages, and calls
//! [`Component::update`].
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::{dispatch, Hook, Propagation};
pub use model::Model;
