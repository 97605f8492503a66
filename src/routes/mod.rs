pub(crate) mod ask;
pub(crate) mod contact;
pub mod health_checks;

pub use health_checks::*;
