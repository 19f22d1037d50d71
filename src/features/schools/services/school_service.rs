use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::schools::dtos::{CreateSchoolDto, SchoolResponseDto, UpdateSchoolDto};
use crate::features::schools::repositories::{RepositoryResult, SchoolRepository};

/// Service for school CRUD operations
pub struct SchoolService {
    repository: Arc<dyn SchoolRepository>,
    query_timeout: Duration,
}

/// Identities are stored uppercase; lookups accept any casing.
fn normalize_uuid(uuid: &str) -> String {
    uuid.trim().to_uppercase()
}

fn not_found(uuid: &str) -> AppError {
    AppError::NotFound(format!("School with uuid {} not found", uuid))
}

impl SchoolService {
    pub fn new(repository: Arc<dyn SchoolRepository>, query_timeout: Duration) -> Self {
        Self {
            repository,
            query_timeout,
        }
    }

    /// Run one persistence call under the configured deadline
    async fn persist<T, F>(&self, operation: &str, call: F) -> Result<T>
    where
        F: Future<Output = RepositoryResult<T>>,
    {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!("Failed to {}: {:?}", operation, e);
                Err(AppError::Database(e))
            }
            Err(_) => Err(AppError::Timeout(format!(
                "Timed out after {}ms trying to {}",
                self.query_timeout.as_millis(),
                operation
            ))),
        }
    }

    /// List all schools
    pub async fn list(&self) -> Result<Vec<SchoolResponseDto>> {
        let schools = self
            .persist("list schools", self.repository.list_all())
            .await?;

        Ok(schools.into_iter().map(SchoolResponseDto::from).collect())
    }

    /// Get school by uuid
    pub async fn get(&self, uuid: &str) -> Result<SchoolResponseDto> {
        let uuid = normalize_uuid(uuid);
        let school = self
            .persist(
                &format!("get school {}", uuid),
                self.repository.find_by_uuid(&uuid),
            )
            .await?
            .ok_or_else(|| not_found(&uuid))?;

        Ok(school.into())
    }

    /// Create a school under a freshly minted uppercase UUID
    pub async fn create(&self, dto: CreateSchoolDto) -> Result<SchoolResponseDto> {
        let uuid = Uuid::new_v4().to_string().to_uppercase();
        let school = self
            .persist(
                &format!("create school {}", uuid),
                self.repository.insert(dto.into_new_school(uuid.clone())),
            )
            .await?;

        tracing::info!("School created: uuid={}, name={}", school.uuid, school.name);

        Ok(school.into())
    }

    /// Overwrite the supplied attributes of the school named by `uuid`.
    ///
    /// The path identity is the only one used; the body cannot carry another.
    pub async fn update(&self, uuid: &str, dto: UpdateSchoolDto) -> Result<SchoolResponseDto> {
        let uuid = normalize_uuid(uuid);
        let school = self
            .persist(
                &format!("update school {}", uuid),
                self.repository.update_by_uuid(&uuid, dto.into()),
            )
            .await?
            .ok_or_else(|| not_found(&uuid))?;

        tracing::info!("School updated: uuid={}", school.uuid);

        Ok(school.into())
    }

    /// Physically delete a school after confirming it exists
    pub async fn delete(&self, uuid: &str) -> Result<()> {
        let uuid = normalize_uuid(uuid);
        let operation = format!("delete school {}", uuid);

        self.persist(&operation, self.repository.find_by_uuid(&uuid))
            .await?
            .ok_or_else(|| not_found(&uuid))?;

        // A concurrent delete can still win between the check and here
        let deleted = self
            .persist(&operation, self.repository.delete_by_uuid(&uuid))
            .await?;
        if !deleted {
            return Err(not_found(&uuid));
        }

        tracing::info!("School deleted: uuid={}", uuid);

        Ok(())
    }
}
