//! In-memory school repository for handler and service tests.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use super::school_repository::{RepositoryResult, SchoolRepository};
use crate::features::schools::models::{NewSchool, School, SchoolChanges};

/// Stores rows in a HashMap keyed by uuid.
///
/// `set_unavailable` makes every call fail like a closed pool and
/// `set_latency` delays every call, so error and deadline paths can be
/// driven without a database.
#[derive(Default)]
pub struct InMemorySchoolRepository {
    rows: RwLock<HashMap<String, School>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
    latency_ms: AtomicI64,
}

impl InMemorySchoolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as i64, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    async fn simulate(&self) -> RepositoryResult<()> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency as u64)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

/// Microsecond precision, matching TIMESTAMPTZ
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn apply(school: &mut School, changes: SchoolChanges) {
    if let Some(name) = changes.name {
        school.name = name;
    }
    if let Some(kode_provinsi) = changes.kode_provinsi {
        school.kode_provinsi = kode_provinsi;
    }
    if let Some(kode_kab_kota) = changes.kode_kab_kota {
        school.kode_kab_kota = kode_kab_kota;
    }
    if let Some(kode_kecamatan) = changes.kode_kecamatan {
        school.kode_kecamatan = kode_kecamatan;
    }
    if let Some(npsn) = changes.npsn {
        school.npsn = npsn;
    }
    if let Some(bentuk) = changes.bentuk {
        school.bentuk = bentuk;
    }
    if let Some(status) = changes.status {
        school.status = status;
    }
    if let Some(alamat_jalan) = changes.alamat_jalan {
        school.alamat_jalan = alamat_jalan;
    }
    if let Some(lintang) = changes.lintang {
        school.lintang = lintang;
    }
    if let Some(bujur) = changes.bujur {
        school.bujur = bujur;
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<School>> {
        self.simulate().await?;
        let mut schools: Vec<School> = self.rows.read().unwrap().values().cloned().collect();
        schools.sort_by_key(|s| (s.created_at, s.id));
        Ok(schools)
    }

    async fn find_by_uuid(&self, uuid: &str) -> RepositoryResult<Option<School>> {
        self.simulate().await?;
        Ok(self.rows.read().unwrap().get(uuid).cloned())
    }

    async fn insert(&self, school: NewSchool) -> RepositoryResult<School> {
        self.simulate().await?;
        let mut rows = self.rows.write().unwrap();
        if rows.contains_key(&school.uuid) {
            return Err(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint: uuid {}",
                school.uuid
            )));
        }

        let created_at = now();
        let row = School {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            uuid: school.uuid,
            name: school.name,
            kode_provinsi: school.kode_provinsi,
            kode_kab_kota: school.kode_kab_kota,
            kode_kecamatan: school.kode_kecamatan,
            npsn: school.npsn,
            bentuk: school.bentuk,
            status: school.status,
            alamat_jalan: school.alamat_jalan,
            lintang: school.lintang,
            bujur: school.bujur,
            created_at,
            updated_at: created_at,
        };
        rows.insert(row.uuid.clone(), row.clone());
        Ok(row)
    }

    async fn update_by_uuid(
        &self,
        uuid: &str,
        changes: SchoolChanges,
    ) -> RepositoryResult<Option<School>> {
        self.simulate().await?;
        let mut rows = self.rows.write().unwrap();
        let Some(row) = rows.get_mut(uuid) else {
            return Ok(None);
        };

        apply(row, changes);
        row.updated_at = now().max(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete_by_uuid(&self, uuid: &str) -> RepositoryResult<bool> {
        self.simulate().await?;
        Ok(self.rows.write().unwrap().remove(uuid).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_school(uuid: &str, name: &str) -> NewSchool {
        NewSchool {
            uuid: uuid.to_string(),
            name: name.to_string(),
            kode_provinsi: "020000".to_string(),
            kode_kab_kota: "026000".to_string(),
            kode_kecamatan: "026001".to_string(),
            npsn: None,
            bentuk: "SMP".to_string(),
            status: "S".to_string(),
            alamat_jalan: None,
            lintang: 0.0,
            bujur: 0.0,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_key_and_equal_timestamps() {
        let repo = InMemorySchoolRepository::new();
        let school = repo.insert(new_school("A", "SMP Satu")).await.unwrap();
        assert_eq!(school.id, 1);
        assert_eq!(school.created_at, school.updated_at);

        let again = repo.insert(new_school("B", "SMP Dua")).await.unwrap();
        assert_eq!(again.id, 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_uuid() {
        let repo = InMemorySchoolRepository::new();
        repo.insert(new_school("A", "SMP Satu")).await.unwrap();
        assert!(repo.insert(new_school("A", "SMP Lain")).await.is_err());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let repo = InMemorySchoolRepository::new();
        let updated = repo
            .update_by_uuid("missing", SchoolChanges::default())
            .await
            .unwrap();
        assert!(updated.is_none());
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_supplied_fields() {
        let repo = InMemorySchoolRepository::new();
        let created = repo.insert(new_school("A", "SMP Satu")).await.unwrap();

        let changes = SchoolChanges {
            status: Some("N".to_string()),
            lintang: Some(-7.25),
            ..Default::default()
        };
        let updated = repo.update_by_uuid("A", changes).await.unwrap().unwrap();

        assert_eq!(updated.name, "SMP Satu");
        assert_eq!(updated.status, "N");
        assert_eq!(updated.lintang, -7.25);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_can_clear_nullable_fields() {
        let repo = InMemorySchoolRepository::new();
        let mut school = new_school("A", "SMP Satu");
        school.npsn = Some("20500001".to_string());
        school.alamat_jalan = Some("Jl. Pemuda 3".to_string());
        repo.insert(school).await.unwrap();

        let changes = SchoolChanges {
            npsn: Some(None),
            ..Default::default()
        };
        let updated = repo.update_by_uuid("A", changes).await.unwrap().unwrap();

        assert_eq!(updated.npsn, None);
        assert_eq!(updated.alamat_jalan.as_deref(), Some("Jl. Pemuda 3"));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let repo = InMemorySchoolRepository::new();
        repo.insert(new_school("A", "SMP Satu")).await.unwrap();
        assert!(repo.delete_by_uuid("A").await.unwrap());
        assert!(!repo.delete_by_uuid("A").await.unwrap());
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_call() {
        let repo = InMemorySchoolRepository::new();
        repo.set_unavailable(true);
        assert!(repo.list_all().await.is_err());
        assert!(repo.find_by_uuid("A").await.is_err());
    }
}
