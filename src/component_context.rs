//! Shared component rendering context
//!
//! `ComponentContext` carries the bits of desktop state a component may need
//! while rendering or handling events, so the `Component` trait does not grow
//! ad-hoc boolean parameters.

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext {
    focused: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }

    /// Returns whether the component is focused (or hovered, for controls
    /// that never take keyboard focus).
    pub const fn focused(&self) -> bool {
        self.focused
    }
}
