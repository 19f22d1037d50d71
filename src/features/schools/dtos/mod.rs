pub mod school_dto;

pub use school_dto::{CreateSchoolDto, SchoolResponseDto, UpdateSchoolDto};
