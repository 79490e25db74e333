use serde::{Deserialize, Serialize};

/// Ответ сервиса string concepts (`GET /stringconcepts`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptsResponse {
    pub implicit_result: f64,
    pub name: String,
}
