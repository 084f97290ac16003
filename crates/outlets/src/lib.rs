//! # Outlet Registry
//!
//! Declarative outlet wiring for DOM-backed UI controllers.
//!
//! ## Overview
//!
//! Controllers reference sibling controllers elsewhere in the DOM tree through
//! named "outlets". This crate records those declarations: the
//! [`OutletRegistry`] keeps one ordered, deduplicated key list per concrete
//! controller type, and the host connection layer reads the lists back to
//! perform the actual wiring. Declarations follow a naming convention —
//! singular properties end in `Outlet`, plural ones in `Outlets` — and the
//! registered key is the property name with that suffix removed.
//!
//! ## Features
//!
//! * **Type-Keyed**: Lists are indexed by the controller's concrete Rust type.
//! * **Validated**: Suffix violations are rejected before any state changes.
//! * **Deduplicated**: First-insertion order, no repeated keys.
//! * **Declarative**: `#[controller]` turns field markers into wiring code.
//!
//! # Example
//!
//! ```rust
//! use wirehub_outlets::prelude::*;
//!
//! #[controller]
//! #[derive(Default)]
//! struct SearchController {
//!     #[outlet]
//!     results_outlet: Option<String>,
//!     #[outlets]
//!     filter_outlets: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), OutletError> {
//! let registry = OutletRegistry::new();
//! let controller = SearchController::default();
//! controller.wire_outlets(&registry)?;
//!
//! assert_eq!(registry.outlets(&controller), ["results", "filter"]);
//! # Ok(())
//! # }
//! ```

mod controller;
mod error;
mod registry;

pub use controller::Controller;
pub use error::{OutletError, OutletErrorExt};
pub use registry::{OUTLET_SUFFIX, OUTLETS_SUFFIX, OutletRegistry};

pub mod prelude {
    //! Convenience re-exports for controller declarations.
    pub use crate::{Controller, OutletError, OutletErrorExt, OutletRegistry};
    pub use wirehub_derive::{controller, wirehub_error};
}
