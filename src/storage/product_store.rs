//! The product record store.
//!
//! The store owns an in-memory copy of the product list and the path of the JSON
//! file that backs it. The file is the source of truth:
//! 1.  Every operation reloads the whole list from disk first.
//! 2.  Mutating operations rewrite the whole file afterwards (atomically).
//! 3.  Rejections leave both the memory copy and the file untouched.
//!
//! Re-reading on every call is the price paid for always reflecting the file. The
//! store does no locking of its own; callers that share it must serialize access.

use crate::domain::{NewProduct, Product, ProductId};
use crate::error::{StoreError, ValidationFailure};
use crate::storage::atomic::write_atomic;
use std::io;
use std::path::{Path, PathBuf};

type WriteFn = fn(&Path, &[u8]) -> io::Result<()>;

pub struct ProductStore {
    path: PathBuf,
    products: Vec<Product>,
    write: WriteFn,
}

impl ProductStore {
    /// Creates a store for `path`. No I/O happens until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            products: Vec::new(),
            write: write_atomic,
        }
    }

    #[cfg(test)]
    fn with_writer(mut self, write: WriteFn) -> Self {
        self.write = write;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records as of the last reload or mutation.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Replaces the in-memory list with the file's contents.
    ///
    /// A missing file is an empty store. Any other read or parse failure leaves the
    /// in-memory list as it was.
    pub fn load(&mut self) -> Result<&[Product], StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "product file absent, starting empty");
                self.products.clear();
                return Ok(&self.products);
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read product file");
                return Err(StoreError::persistence(&self.path, e));
            }
        };

        let products: Vec<Product> = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to parse product file");
            StoreError::persistence(&self.path, e)
        })?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "product file loaded");
        self.products = products;
        Ok(&self.products)
    }

    /// Writes the full in-memory list to the file as one compact JSON array.
    pub fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec(&self.products)
            .map_err(|e| StoreError::persistence(&self.path, e))?;
        (self.write)(self.path.as_path(), &json).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to write product file");
            StoreError::persistence(&self.path, e)
        })
    }

    /// Adds a new product, assigning it the next id.
    ///
    /// Checks run in a fixed order: an existing code together with an existing
    /// title is a duplicate; an existing code alone is a collision; then every
    /// field must be present.
    pub fn create(&mut self, candidate: NewProduct) -> Result<Product, StoreError> {
        self.load()?;

        let code_taken = self.products.iter().any(|p| p.code == candidate.code);
        let title_taken = self.products.iter().any(|p| p.title == candidate.title);

        if code_taken && title_taken {
            tracing::warn!(title = %candidate.title, "product already exists, not added");
            return Err(ValidationFailure::AlreadyExists {
                title: candidate.title,
            }
            .into());
        }
        if code_taken {
            tracing::warn!(code = %candidate.code, title = %candidate.title, "product code already in use");
            return Err(ValidationFailure::CodeCollision {
                code: candidate.code,
                title: candidate.title,
            }
            .into());
        }
        let missing = candidate.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(title = %candidate.title, ?missing, "product has empty fields");
            return Err(ValidationFailure::IncompleteFields {
                title: candidate.title,
                missing,
            }
            .into());
        }

        let id = self.next_id().map_err(|e| {
            tracing::error!(error = %e, "cannot assign product id");
            e
        })?;
        let product = Product::with_id(id, candidate);
        self.products.push(product.clone());
        if let Err(e) = self.persist() {
            self.products.pop();
            return Err(e);
        }
        tracing::info!(id = product.id, path = %self.path.display(), "product saved");
        Ok(product)
    }

    /// Reloads and returns every product in stored order.
    pub fn read_all(&mut self) -> Result<Vec<Product>, StoreError> {
        Ok(self.load()?.to_vec())
    }

    pub fn read_by_id(&mut self, id: ProductId) -> Result<Product, StoreError> {
        self.load()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Replaces every field of product `id` with `replacement`, keeping its id and
    /// its position in the list.
    pub fn update(&mut self, id: ProductId, replacement: NewProduct) -> Result<Product, StoreError> {
        self.load()?;
        let Some(index) = self.position(id) else {
            tracing::warn!(id, "cannot update missing product");
            return Err(StoreError::NotFound { id });
        };

        let updated = Product::with_id(id, replacement);
        let previous = std::mem::replace(&mut self.products[index], updated.clone());
        if let Err(e) = self.persist() {
            self.products[index] = previous;
            return Err(e);
        }
        tracing::info!(id, path = %self.path.display(), "product updated");
        Ok(updated)
    }

    /// Removes product `id`. Later products shift down one position; ids stay as
    /// they are.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, StoreError> {
        self.load()?;
        let Some(index) = self.position(id) else {
            tracing::warn!(id, "cannot delete missing product");
            return Err(StoreError::NotFound { id });
        };

        let removed = self.products.remove(index);
        if let Err(e) = self.persist() {
            self.products.insert(index, removed);
            return Err(e);
        }
        tracing::info!(id, path = %self.path.display(), "product deleted");
        Ok(removed)
    }

    /// One past the largest id held, or 1 for an empty store. Independent of order.
    pub fn next_id(&self) -> Result<ProductId, StoreError> {
        match self.products.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ValidationFailure::IdSpaceExhausted { max }.into()),
        }
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
