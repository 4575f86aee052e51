//! Internal domain modules for the Jotnotes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod error;
pub mod note;
pub mod notebook;
pub mod session;
pub mod storage;
pub mod validation;

#[doc(inline)]
pub use error::{JotnotesError, Result};
#[doc(inline)]
pub use note::Note;
#[doc(inline)]
pub use notebook::Notebook;
#[doc(inline)]
pub use session::with_session;
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use validation::{validate_title, MAX_TITLE_CHARS};
