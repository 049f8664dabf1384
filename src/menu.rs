//! Navigation menu and its overlay.

/// The menu and the overlay behind it open and close together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Overlay click.
    pub fn close(&mut self) {
        self.open = false;
    }
}
