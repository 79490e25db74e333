use axum::extract::State;
use axum::Json;
use contracts::domain::string_concepts::ConceptsResponse;

use crate::domain::string_concepts::service;
use crate::shared::config::StringConceptsConfig;

/// GET /stringconcepts
pub async fn get_concepts(
    State(settings): State<StringConceptsConfig>,
) -> Json<ConceptsResponse> {
    Json(service::build_response(&settings.sample_name))
}
