use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::schools::models::{NewSchool, School, SchoolChanges};
use crate::shared::types::serialize_timestamp;
use crate::shared::validation::not_blank;

const MIN_LINTANG: f64 = -90.0;
const MAX_LINTANG: f64 = 90.0;
const MIN_BUJUR: f64 = -180.0;
const MAX_BUJUR: f64 = 180.0;

/// Request DTO for creating a school.
///
/// Identity and timestamps are assigned by the server; any such fields in the
/// body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"), custom(function = "not_blank"))]
    pub name: String,

    /// Province code (kode provinsi)
    #[validate(length(min = 1, max = 16, message = "kode_provinsi must be 1-16 characters"), custom(function = "not_blank"))]
    pub kode_provinsi: String,

    /// Regency/city code (kode kabupaten/kota)
    #[validate(length(min = 1, max = 16, message = "kode_kab_kota must be 1-16 characters"), custom(function = "not_blank"))]
    pub kode_kab_kota: String,

    /// Subdistrict code (kode kecamatan)
    #[validate(length(min = 1, max = 16, message = "kode_kecamatan must be 1-16 characters"), custom(function = "not_blank"))]
    pub kode_kecamatan: String,

    /// National school registration number
    #[validate(length(max = 32, message = "npsn must not exceed 32 characters"))]
    pub npsn: Option<String>,

    /// School form, e.g. SD, SMP, SMA, SMK
    #[validate(length(min = 1, max = 64, message = "bentuk must be 1-64 characters"), custom(function = "not_blank"))]
    pub bentuk: String,

    #[validate(length(min = 1, max = 32, message = "status must be 1-32 characters"), custom(function = "not_blank"))]
    pub status: String,

    pub alamat_jalan: Option<String>,

    /// Latitude, defaults to 0
    #[serde(default)]
    #[validate(range(min = MIN_LINTANG, max = MAX_LINTANG, message = "lintang must be between -90 and 90"))]
    pub lintang: f64,

    /// Longitude, defaults to 0
    #[serde(default)]
    #[validate(range(min = MIN_BUJUR, max = MAX_BUJUR, message = "bujur must be between -180 and 180"))]
    pub bujur: f64,
}

/// Request DTO for updating a school. Only the supplied fields are overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSchoolDto {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 16, message = "kode_provinsi must be 1-16 characters"), custom(function = "not_blank"))]
    pub kode_provinsi: Option<String>,

    #[validate(length(min = 1, max = 16, message = "kode_kab_kota must be 1-16 characters"), custom(function = "not_blank"))]
    pub kode_kab_kota: Option<String>,

    #[validate(length(min = 1, max = 16, message = "kode_kecamatan must be 1-16 characters"), custom(function = "not_blank"))]
    pub kode_kecamatan: Option<String>,

    /// Omit to keep, `null` to clear
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 32, message = "npsn must not exceed 32 characters"))]
    pub npsn: Option<Option<String>>,

    #[validate(length(min = 1, max = 64, message = "bentuk must be 1-64 characters"), custom(function = "not_blank"))]
    pub bentuk: Option<String>,

    #[validate(length(min = 1, max = 32, message = "status must be 1-32 characters"), custom(function = "not_blank"))]
    pub status: Option<String>,

    /// Omit to keep, `null` to clear
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub alamat_jalan: Option<Option<String>>,

    #[validate(range(min = MIN_LINTANG, max = MAX_LINTANG, message = "lintang must be between -90 and 90"))]
    pub lintang: Option<f64>,

    #[validate(range(min = MIN_BUJUR, max = MAX_BUJUR, message = "bujur must be between -180 and 180"))]
    pub bujur: Option<f64>,
}

/// Marks a field as present even when its value is `null`, so an update can
/// tell "clear this column" apart from "leave it alone".
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Response DTO for school. The internal numeric key is not part of the API.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SchoolResponseDto {
    /// Uppercase UUID identifying the school
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
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl From<School> for SchoolResponseDto {
    fn from(s: School) -> Self {
        Self {
            uuid: s.uuid,
            name: s.name,
            kode_provinsi: s.kode_provinsi,
            kode_kab_kota: s.kode_kab_kota,
            kode_kecamatan: s.kode_kecamatan,
            npsn: s.npsn,
            bentuk: s.bentuk,
            status: s.status,
            alamat_jalan: s.alamat_jalan,
            lintang: s.lintang,
            bujur: s.bujur,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

impl CreateSchoolDto {
    /// Attach the server-minted identity
    pub fn into_new_school(self, uuid: String) -> NewSchool {
        NewSchool {
            uuid,
            name: self.name,
            kode_provinsi: self.kode_provinsi,
            kode_kab_kota: self.kode_kab_kota,
            kode_kecamatan: self.kode_kecamatan,
            npsn: self.npsn,
            bentuk: self.bentuk,
            status: self.status,
            alamat_jalan: self.alamat_jalan,
            lintang: self.lintang,
            bujur: self.bujur,
        }
    }
}

impl From<UpdateSchoolDto> for SchoolChanges {
    fn from(dto: UpdateSchoolDto) -> Self {
        Self {
            name: dto.name,
            kode_provinsi: dto.kode_provinsi,
            kode_kab_kota: dto.kode_kab_kota,
            kode_kecamatan: dto.kode_kecamatan,
            npsn: dto.npsn,
            bentuk: dto.bentuk,
            status: dto.status,
            alamat_jalan: dto.alamat_jalan,
            lintang: dto.lintang,
            bujur: dto.bujur,
        }
    }
}
