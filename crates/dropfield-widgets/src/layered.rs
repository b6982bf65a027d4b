//! A value with an optional temporary override on top.

/// A base value plus an optional preview that shadows it.
///
/// While a preview is set, [`resolve`](Layered::resolve) returns it; once it
/// is cleared the base shows through again. The base is never touched by
/// previewing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layered<T> {
    preview: Option<T>,
    base: T,
}

impl<T> Layered<T> {
    pub fn new(base: T) -> Self {
        Self {
            preview: None,
            base,
        }
    }

    /// The preview if there is one, otherwise the base.
    pub fn resolve(&self) -> &T {
        self.preview.as_ref().unwrap_or(&self.base)
    }

    pub fn base(&self) -> &T {
        &self.base
    }

    pub fn preview(&self) -> Option<&T> {
        self.preview.as_ref()
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    pub fn set_preview(&mut self, value: T) {
        self.preview = Some(value);
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Replace the base and drop any preview.
    pub fn set_base(&mut self, value: T) {
        self.base = value;
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_base_without_preview() {
        let layered = Layered::new("base");
        assert_eq!(*layered.resolve(), "base");
        assert!(!layered.is_previewing());
    }

    #[test]
    fn preview_shadows_base() {
        let mut layered = Layered::new(1);
        layered.set_preview(2);
        assert_eq!(*layered.resolve(), 2);
        assert_eq!(*layered.base(), 1);

        layered.clear_preview();
        assert_eq!(*layered.resolve(), 1);
    }

    #[test]
    fn set_base_drops_preview() {
        let mut layered = Layered::new(1);
        layered.set_preview(2);
        layered.set_base(3);
        assert_eq!(layered.preview(), None);
        assert_eq!(*layered.resolve(), 3);
    }
}
