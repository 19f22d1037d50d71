//! School (sekolah) resource.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/school` | List all schools |
//! | GET | `/api/v1/school/{id}` | Get school by uuid |
//! | POST | `/api/v1/school` | Create a school |
//! | PUT | `/api/v1/school/{id}` | Update a school |
//! | DELETE | `/api/v1/school/{id}` | Delete a school |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgSchoolRepository;
pub use services::SchoolService;
