//! Interactive validation: the retry-until-valid loop and the composite
//! prompts built on top of it.
//!
//! All I/O goes through the injectable [`Console`] trait; the validation
//! decision itself stays in `fieldspec-validate`.

mod compose;
mod console;
mod input;

use std::path::Path;

pub use compose::{DateOptions, DateTimeOptions, TimeOptions, date, datetime, time};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use input::{true_false, validate_input};

/// Whether `path` names an existing regular file.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}
