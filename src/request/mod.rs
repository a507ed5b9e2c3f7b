//! Engine input: validated people and search window, plus JSON loading.

mod error;
mod input;
mod model;

pub use error::InputError;
pub use input::{load_request, parse_request};
pub use model::{Person, Request};
