//! Survey schema types and the line-prefix codec used to persist a
//! structured survey response in the review store's single text column.

pub mod catalog;
pub mod codec;
pub mod error;
pub mod schema;

pub use codec::{decode, encode};
pub use schema::*;
