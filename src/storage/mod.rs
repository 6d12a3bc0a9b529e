pub mod atomic;
pub mod product_store;

pub use atomic::write_atomic;
pub use product_store::ProductStore;
