mod ask;
mod contact;

pub use ask::*;
pub use contact::*;
