pub mod date_range;
pub mod options;
pub mod request;

pub use date_range::*;
pub use options::*;
pub use request::*;
