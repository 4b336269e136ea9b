//! Repository Layer - Core Traits
//!
//! CRUD contract shared by the board, column and card repositories.
//! Reads skip rows flagged as destroyed.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// CRUD over one entity table. Writes that also touch a parent's order
/// array do so in the same transaction.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find a live (not destroyed) entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all live entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Overwrite an existing entity; NotFound if it is gone
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
