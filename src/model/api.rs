use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clients match on the exact `{"error": ...}` shape for every failure
    /// response, so the field name is part of the API contract.
    #[test]
    fn error_body_shape() {
        let body = serde_json::to_value(ErrorDto {
            error: "Route not found".to_string(),
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "error": "Route not found" }));
    }
}
