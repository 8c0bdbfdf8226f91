//! Storage layer for the cat catalog

mod catalog;

pub use catalog::Catalog;
