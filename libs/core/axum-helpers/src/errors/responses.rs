//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Internal server error",
        "error": "INTERNAL_ERROR",
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Validation failed",
        "error": "VALIDATION_ERROR",
        "details": {
            "name": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "max": 100, "value": ""}
            }]
        },
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Invalid UUID format",
        "error": "INVALID_UUID",
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "User with id 2f1c0d8e-5b7a-4c3e-9a1b-6d2e8f4a7c90 not found",
        "error": "NOT_FOUND",
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "User with this email already exists",
        "error": "DUPLICATE_RESOURCE",
        "timestamp": "2024-01-01T00:00:00Z"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);
