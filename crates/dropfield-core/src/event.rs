//! Cancelable host hooks.
//!
//! Components expose some of their reactions (gaining focus, a pointer
//! press, ...) to the host *before* acting on them. The host returns a
//! [`Propagation`] from its hook; [`Propagation::Handled`] tells the
//! component to skip its own reaction for that event.

/// What a host hook wants the component to do after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Let the component react as usual.
    #[default]
    Continue,
    /// The host took care of the event; the component does nothing.
    Handled,
}

impl Propagation {
    /// Whether the component should go on with its own reaction.
    pub fn should_continue(self) -> bool {
        matches!(self, Propagation::Continue)
    }
}

/// A boxed host hook receiving events of type `E`.
pub type Hook<E> = Box<dyn FnMut(&E) -> Propagation + Send>;

/// Run `hook` (if any) for `event`.
///
/// Returns `true` when the component should continue with its own reaction,
/// which is always the case when no hook is installed.
pub fn dispatch<E>(hook: Option<&mut Hook<E>>, event: &E) -> bool {
    match hook {
        Some(hook) => hook(event).should_continue(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_hook_continues() {
        assert!(dispatch::<u8>(None, &1));
    }

    #[test]
    fn handled_hook_stops() {
        let mut hook: Hook<u8> = Box::new(|_| Propagation::Handled);
        assert!(!dispatch(Some(&mut hook), &1));
    }

    #[test]
    fn hook_sees_event_and_can_continue() {
        let mut seen = Vec::new();
        {
            let mut hook: Hook<u8> = Box::new(|e| {
                if *e > 1 {
                    Propagation::Handled
                } else {
                    Propagation::Continue
                }
            });
            for e in [1u8, 2] {
                seen.push(dispatch(Some(&mut hook), &e));
            }
        }
        assert_eq!(seen, vec![true, false]);
    }
}
