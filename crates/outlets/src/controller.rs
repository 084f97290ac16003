use std::any::Any;
use std::fmt::Debug;

/// Marker trait for DOM-backed UI controllers that declare outlets.
///
/// The registry keys outlet lists by the concrete type behind the trait
/// object, so the only requirement on implementors is the [`as_any`] hook.
/// Use `#[controller]` from the prelude to implement it alongside the
/// generated wiring method, or implement it by hand for plain types.
///
/// [`as_any`]: Controller::as_any
pub trait Controller: Any + Debug {
    /// Helper to allow concrete-type resolution from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// Controller type label used in trace output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
