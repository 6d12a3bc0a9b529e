//! Domain types for the inventory.

pub mod product;

pub use product::{NewProduct, Price, Product, ProductId, Stock};
