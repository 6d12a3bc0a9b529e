pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::{NewProduct, Price, Product, ProductId, Stock};
pub use error::{ErrorKind, StoreError, ValidationFailure};
pub use infra::Config;
pub use storage::ProductStore;
