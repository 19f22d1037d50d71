use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a row of the `schools` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct School {
    /// Internal surrogate key; never exposed over the API
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub kode_provinsi: String,
    pub kode_kab_kota: String,
    pub kode_kecamatan: String,
    pub npsn: Option<String>,
    pub bentuk: String,
    pub status: String,
    pub alamat_jalan: Option<String>,
    pub lintang: f64,
    pub bujur: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a new row. Timestamps and the surrogate key are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewSchool {
    pub uuid: String,
    pub name: String,
    pub kode_provinsi: String,
    pub kode_kab_kota: String,
    pub kode_kecamatan: String,
    pub npsn: Option<String>,
    pub bentuk: String,
    pub status: String,
    pub alamat_jalan: Option<String>,
    pub lintang: f64,
    pub bujur: f64,
}

/// Partial overwrite of a row; `None` keeps the stored value.
///
/// Nullable columns nest the option: `Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct SchoolChanges {
    pub name: Option<String>,
    pub kode_provinsi: Option<String>,
    pub kode_kab_kota: Option<String>,
    pub kode_kecamatan: Option<String>,
    pub npsn: Option<Option<String>>,
    pub bentuk: Option<String>,
    pub status: Option<String>,
    pub alamat_jalan: Option<Option<String>>,
    pub lintang: Option<f64>,
    pub bujur: Option<f64>,
}
