use crate::command::Command;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// A host application that embeds dropfield components implements `Model`:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] carrying startup messages.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. The host's own event loop turns terminal events into messages.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] with follow-up messages.
///
/// dropfield does not ship an event loop; [`TestProgram`](crate::testing::TestProgram)
/// drives a `Model` headlessly for tests.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);
}
