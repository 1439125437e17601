use axum::Json;
use serde_json::{Value, json};

/// OpenAPI description of the public routes. Mounted outside production only.
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Form Submissions API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/api/submissions": submissions_path(),
            "/api/submissions/{id}": submission_path(),
            "/api/forms/{formType}/validate": validate_path(),
        },
        "components": { "schemas": schemas() },
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } },
    })
}

fn parameter(name: &str, location: &str, schema: Value) -> Value {
    json!({
        "name": name,
        "in": location,
        "required": location == "path",
        "schema": schema,
    })
}

fn submissions_path() -> Value {
    let list = json!({
        "summary": "List submissions, newest first",
        "parameters": [parameter("search", "query", json!({ "type": "string" }))],
        "responses": {
            "200": json_response(
                "Matching submissions",
                json!({ "type": "array", "items": schema_ref("SubmissionResponse") }),
            ),
        },
    });

    let create = json!({
        "summary": "Store a submission",
        "requestBody": {
            "required": true,
            "content": { "application/json": { "schema": schema_ref("CreateSubmissionRequest") } },
        },
        "responses": {
            "201": json_response("Created", schema_ref("SubmissionResponse")),
            "400": json_response("Invalid request", schema_ref("ErrorResponse")),
        },
    });

    json!({ "get": list, "post": create })
}

fn submission_path() -> Value {
    json!({
        "get": {
            "summary": "Fetch one submission",
            "parameters": [parameter("id", "path", json!({ "type": "string", "format": "uuid" }))],
            "responses": {
                "200": json_response("The submission", schema_ref("SubmissionResponse")),
                "404": json_response("Not found", schema_ref("ErrorResponse")),
            },
        },
    })
}

fn validate_path() -> Value {
    json!({
        "post": {
            "summary": "Check a payload against a form's field rules",
            "parameters": [parameter("formType", "path", json!({ "type": "string" }))],
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": { "type": "object" } } },
            },
            "responses": {
                "200": json_response("Validation result", schema_ref("ValidationReport")),
                "400": json_response("Invalid request", schema_ref("ErrorResponse")),
                "404": json_response("Unknown form type", schema_ref("ErrorResponse")),
            },
        },
    })
}

fn schemas() -> Value {
    json!({
        "CreateSubmissionRequest": {
            "type": "object",
            "required": ["formType", "data"],
            "properties": {
                "formType": { "type": "string" },
                "data": { "type": "object" },
            },
        },
        "SubmissionResponse": {
            "type": "object",
            "properties": {
                "id": { "type": "string", "format": "uuid" },
                "formType": { "type": "string" },
                "data": { "type": "string", "description": "JSON-encoded payload" },
                "submittedAt": { "type": "string", "format": "date-time" },
            },
        },
        "ValidationReport": {
            "type": "object",
            "properties": {
                "valid": { "type": "boolean" },
                "errors": { "type": "object", "additionalProperties": { "type": "string" } },
            },
        },
        "ErrorResponse": {
            "type": "object",
            "properties": {
                "error": { "type": "string" },
                "details": { "type": "string" },
            },
        },
    })
}
