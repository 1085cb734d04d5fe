pub mod action;
pub mod condition;
pub mod conversion;
pub mod definition;
pub mod index;

pub use action::*;
pub use condition::*;
pub use conversion::*;
pub use definition::*;
pub use index::*;
