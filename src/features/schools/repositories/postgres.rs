use async_trait::async_trait;
use sqlx::PgPool;

use super::school_repository::{RepositoryResult, SchoolRepository};
use crate::features::schools::models::{NewSchool, School, SchoolChanges};

const SCHOOL_COLUMNS: &str = "id, uuid, name, kode_provinsi, kode_kab_kota, kode_kecamatan, \
     npsn, bentuk, status, alamat_jalan, lintang, bujur, created_at, updated_at";

/// PostgreSQL-backed school repository
pub struct PgSchoolRepository {
    pool: PgPool,
}

impl PgSchoolRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolRepository for PgSchoolRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<School>> {
        let query = format!(
            "SELECT {} FROM schools ORDER BY created_at, id",
            SCHOOL_COLUMNS
        );

        sqlx::query_as::<_, School>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_uuid(&self, uuid: &str) -> RepositoryResult<Option<School>> {
        let query = format!("SELECT {} FROM schools WHERE uuid = $1", SCHOOL_COLUMNS);

        sqlx::query_as::<_, School>(&query)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert(&self, school: NewSchool) -> RepositoryResult<School> {
        // created_at and updated_at come from the same NOW() so they start equal
        let query = format!(
            r#"
            INSERT INTO schools (uuid, name, kode_provinsi, kode_kab_kota, kode_kecamatan,
                                 npsn, bentuk, status, alamat_jalan, lintang, bujur,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW(), NOW())
            RETURNING {}
            "#,
            SCHOOL_COLUMNS
        );

        sqlx::query_as::<_, School>(&query)
            .bind(school.uuid)
            .bind(school.name)
            .bind(school.kode_provinsi)
            .bind(school.kode_kab_kota)
            .bind(school.kode_kecamatan)
            .bind(school.npsn)
            .bind(school.bentuk)
            .bind(school.status)
            .bind(school.alamat_jalan)
            .bind(school.lintang)
            .bind(school.bujur)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_by_uuid(
        &self,
        uuid: &str,
        changes: SchoolChanges,
    ) -> RepositoryResult<Option<School>> {
        // Nullable columns carry a "was supplied" flag so NULL can be written.
        // GREATEST keeps updated_at monotonic even if the clock steps back.
        let query = format!(
            r#"
            UPDATE schools
            SET name = COALESCE($1, name),
                kode_provinsi = COALESCE($2, kode_provinsi),
                kode_kab_kota = COALESCE($3, kode_kab_kota),
                kode_kecamatan = COALESCE($4, kode_kecamatan),
                npsn = CASE WHEN $5 THEN $6 ELSE npsn END,
                bentuk = COALESCE($7, bentuk),
                status = COALESCE($8, status),
                alamat_jalan = CASE WHEN $9 THEN $10 ELSE alamat_jalan END,
                lintang = COALESCE($11, lintang),
                bujur = COALESCE($12, bujur),
                updated_at = GREATEST(NOW(), updated_at)
            WHERE uuid = $13
            RETURNING {}
            "#,
            SCHOOL_COLUMNS
        );

        sqlx::query_as::<_, School>(&query)
            .bind(changes.name)
            .bind(changes.kode_provinsi)
            .bind(changes.kode_kab_kota)
            .bind(changes.kode_kecamatan)
            .bind(changes.npsn.is_some())
            .bind(changes.npsn.flatten())
            .bind(changes.bentuk)
            .bind(changes.status)
            .bind(changes.alamat_jalan.is_some())
            .bind(changes.alamat_jalan.flatten())
            .bind(changes.lintang)
            .bind(changes.bujur)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_by_uuid(&self, uuid: &str) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM schools WHERE uuid = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
