//! # Greenfield UI
//!
//! Presentational components for the greenfield starter, rendered to plain
//! HTML strings.
//!
//! Components resolve their look from two closed style axes — [`Variant`]
//! and [`Size`] — plus an optional additive class string that is always
//! appended last, so caller overrides win. Unrecognized values are
//! unrepresentable: the axes are enums, and their `FromStr` implementations
//! reject unknown strings instead of falling back to a default.
//!
//! ```
//! use greenfield_ui::{Button, Size, Variant};
//!
//! let html = Button::new("Save")
//!     .variant(Variant::Danger)
//!     .size(Size::Large)
//!     .class("shadow-lg")
//!     .render();
//! assert!(html.contains("bg-red-600"));
//! assert!(html.contains("shadow-lg"));
//! ```

pub mod button;
pub mod card;

mod escape;

pub use button::{Button, Size, Variant};
pub use card::Card;
