//! Build a GUI settings dialog from a declarative argument schema.
//!
//! Each argument specification is mapped onto an input widget (checkbox,
//! spin box, dropdown, text field), widgets are grouped the way the schema
//! groups its arguments, and accepting the dialog collects everything back
//! into a flat name/value mapping.

mod error;
pub use error::*;
mod spec;
pub use spec::*;
mod values;
pub use values::*;
mod widget;
pub use widget::*;
mod group;
pub use group::*;
mod dialog;
pub use dialog::*;
