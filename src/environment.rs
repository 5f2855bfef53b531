/// System-level hints the page reacts to.
///
/// In the browser these come from media queries; tests use [`FixedEnvironment`].
pub trait EnvironmentSignals {
    fn prefers_dark(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub dark: bool,
    pub reduced_motion: bool,
}

impl FixedEnvironment {
    pub fn new(dark: bool, reduced_motion: bool) -> Self {
        Self {
            dark,
            reduced_motion,
        }
    }
}

impl EnvironmentSignals for FixedEnvironment {
    fn prefers_dark(&self) -> bool {
        self.dark
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}
