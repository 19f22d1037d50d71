//! Persistence gateway for schools.
//!
//! [`SchoolRepository`] is the only path to the `schools` table. The service
//! layer holds it as a trait object so handlers can be exercised against
//! [`InMemorySchoolRepository`] in tests.

#[cfg(test)]
mod memory;
mod postgres;
mod school_repository;

#[cfg(test)]
pub use memory::InMemorySchoolRepository;
pub use postgres::PgSchoolRepository;
pub use school_repository::{RepositoryResult, SchoolRepository};
