use utoipa::{Modify, OpenApi};

use crate::features::schools::{dtos as schools_dtos, handlers as schools_handlers};
use crate::shared::types::{ApiResponse, MessageData};

#[derive(OpenApi)]
#[openapi(
    paths(
        schools_handlers::list_schools,
        schools_handlers::get_school,
        schools_handlers::create_school,
        schools_handlers::update_school,
        schools_handlers::delete_school,
    ),
    components(
        schemas(
            // Shared
            MessageData,
            ApiResponse<MessageData>,
            // Schools
            schools_dtos::CreateSchoolDto,
            schools_dtos::UpdateSchoolDto,
            schools_dtos::SchoolResponseDto,
            ApiResponse<schools_dtos::SchoolResponseDto>,
            ApiResponse<Vec<schools_dtos::SchoolResponseDto>>,
        )
    ),
    tags(
        (name = "schools", description = "School (sekolah) records"),
    ),
    info(
        title = "Sekolah API",
        version = "0.1.0",
        description = "API documentation for Sekolah service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
