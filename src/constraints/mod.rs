pub mod constraint;
pub mod error;

pub use constraint::{any_covers, DateConstraint};
pub use error::ValidationError;
