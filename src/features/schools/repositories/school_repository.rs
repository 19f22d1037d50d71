use async_trait::async_trait;

use crate::features::schools::models::{NewSchool, School, SchoolChanges};

pub type RepositoryResult<T> = std::result::Result<T, sqlx::Error>;

/// Storage operations over the `schools` table.
///
/// Every method is a single atomic statement against the store. Identities
/// are matched exactly; callers normalize them first.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// All schools, oldest first
    async fn list_all(&self) -> RepositoryResult<Vec<School>>;

    async fn find_by_uuid(&self, uuid: &str) -> RepositoryResult<Option<School>>;

    /// Insert a row and return it with the store-assigned key and timestamps
    async fn insert(&self, school: NewSchool) -> RepositoryResult<School>;

    /// Overwrite the supplied fields and refresh `updated_at`.
    ///
    /// Returns `None` when no row has the given identity.
    async fn update_by_uuid(
        &self,
        uuid: &str,
        changes: SchoolChanges,
    ) -> RepositoryResult<Option<School>>;

    /// Physically remove the row. Returns `false` when nothing was deleted.
    async fn delete_by_uuid(&self, uuid: &str) -> RepositoryResult<bool>;
}
