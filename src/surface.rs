/// The page elements the toggle drives: a dark marker on the root container
/// and a glyph on the trigger control.
pub trait ThemeSurface {
    /// Whether the dark marker is currently present.
    fn is_dark(&self) -> bool;

    /// Add (`true`) or remove (`false`) the dark marker.
    fn set_dark(&mut self, dark: bool);

    /// Flip the dark marker and return the resulting state.
    fn toggle_dark(&mut self) -> bool {
        let next = !self.is_dark();
        self.set_dark(next);
        next
    }

    /// Replace the trigger's displayed text.
    fn set_glyph(&mut self, glyph: &str);
}
