//! Parsers for the raw text inputs: the product index and entity descriptions.

pub mod description;
pub mod index;
pub mod usage;
