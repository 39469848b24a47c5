pub mod mood;
pub mod survey;
pub mod tag;

pub use mood::*;
pub use survey::*;
pub use tag::*;
