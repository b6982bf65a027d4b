//! **dropfield** -- a combobox input for [`ratatui`] applications.
//!
//! This is the umbrella crate that re-exports everything needed to embed a
//! dropfield from a single dependency:
//!
//! ```toml
//! [dependencies]
//! dropfield = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`dropfield_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Propagation`], etc.).
//! * The [`widgets`] module re-exports everything from [`dropfield_widgets`].
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use dropfield::widgets::input_field::{self, ChangeKind, InputField};
//! use dropfield::{Command, Component, Model};
//! use ratatui::Frame;
//!
//! struct Form {
//!     country: InputField,
//!     chosen: Option<String>,
//! }
//!
//! enum Msg {
//!     Country(input_field::Message),
//! }
//!
//! impl Model for Form {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let country = InputField::new("Country")
//!             .with_options(["France", "Germany", "Spain"])
//!             .with_strict(true);
//!         (Form { country, chosen: None }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Country(input_field::Message::Changed(change)) => {
//!                 if change.kind == ChangeKind::Commit {
//!                     self.chosen = Some(change.value);
//!                 }
//!                 Command::none()
//!             }
//!             Msg::Country(m) => self.country.update(m).map(Msg::Country),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.country.view(frame, area);
//!     }
//! }
//! ```

pub use dropfield_core::*;
pub mod widgets {
    pub use dropfield_widgets::*;
}

// Re-export dependencies for downstream crates
pub use crossterm;
pub use ratatui;

#[cfg(test)]
mod tests {
    use super::widgets::input_field::{self, ChangeKind, InputField};
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::Frame;

    struct Form {
        country: InputField,
        chosen: Option<String>,
    }

    enum Msg {
        Country(input_field::Message),
    }

    impl Model for Form {
        type Message = Msg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<Msg>) {
            let country = InputField::new("Country")
                .with_options(["France", "Germany", "Spain"])
                .with_strict(true);
            (
                Form {
                    country,
                    chosen: None,
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Country(input_field::Message::Changed(change)) => {
                    if change.kind == ChangeKind::Commit {
                        self.chosen = Some(change.value);
                    }
                    Command::none()
                }
                Msg::Country(m) => self.country.update(m).map(Msg::Country),
            }
        }

        fn view(&self, frame: &mut Frame) {
            let area = frame.area();
            self.country.view(frame, area);
        }
    }

    fn key(code: KeyCode) -> Msg {
        Msg::Country(input_field::Message::KeyPress(KeyEvent::from(code)))
    }

    #[test]
    fn umbrella_drives_a_form() {
        let mut prog = testing::TestProgram::<Form>::new(());
        prog.send(Msg::Country(input_field::Message::Focus));
        prog.send(key(KeyCode::Down));
        prog.send(key(KeyCode::Enter));
        prog.drain_messages();
        assert_eq!(prog.model().chosen.as_deref(), Some("France"));

        let out = prog.render_string(20, 2);
        assert!(out.starts_with("Country"));
        assert!(out.contains("France"));
    }

    #[test]
    fn strict_form_refuses_unknown_country() {
        let mut prog = testing::TestProgram::<Form>::new(());
        prog.send(Msg::Country(input_field::Message::Focus));
        prog.send(Msg::Country(input_field::Message::Input("Atlantis".into())));
        prog.send(Msg::Country(input_field::Message::Blur));
        prog.drain_messages();
        assert_eq!(prog.model().chosen, None);
        assert_eq!(prog.model().country.value(), "");
    }
}
