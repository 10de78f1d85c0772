//! Traits an owning structure forwards its accessors through.

/// A cell that stores a value behind intercepted reads and writes.
///
/// Owners keep the cell as a private field and hand-write a getter/setter
/// pair that delegates here.
pub trait Wrapper {
    /// The type exposed to the owner.
    type Value;

    /// Current stored value.
    fn wrapped_value(&self) -> Self::Value;

    /// Store `value`, subject to whatever constraint the cell enforces.
    fn set_wrapped_value(&mut self, value: Self::Value);
}

/// A wrapper that also exposes a secondary, read-only observation.
pub trait Projected: Wrapper {
    /// The type of the secondary observation.
    type Projection;

    /// Current projection, derived from the cell's state.
    fn projected_value(&self) -> Self::Projection;
}
