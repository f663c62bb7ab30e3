//! API documentation endpoints.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, response::IntoResponse};
use serde_json::{Value, json};

/// One row of the endpoint table.
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub auth: bool,
    pub summary: &'static str,
}

const ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "GET",
        path: "/{alias}",
        auth: false,
        summary: "Redirect to the URL stored under the alias",
    },
    EndpointDoc {
        method: "POST",
        path: "/create_url?original_url=&custom_alias=",
        auth: true,
        summary: "Store a URL under a custom or generated alias",
    },
    EndpointDoc {
        method: "GET",
        path: "/health",
        auth: false,
        summary: "Store connectivity check",
    },
    EndpointDoc {
        method: "GET",
        path: "/openapi.json",
        auth: false,
        summary: "OpenAPI document",
    },
];

/// Template for the documentation page.
///
/// Renders `templates/docs.html`: the endpoint table and a form that calls
/// `POST /create_url` from the browser.
#[derive(Template, WebTemplate)]
#[template(path = "docs.html")]
pub struct DocsTemplate {
    pub title: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [EndpointDoc],
}

/// Renders the documentation page.
///
/// # Endpoint
///
/// `GET /`
pub async fn docs_handler() -> impl IntoResponse {
    DocsTemplate {
        title: "Redirector",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    }
}

/// Serves the OpenAPI 3 description of the public API.
///
/// # Endpoint
///
/// `GET /openapi.json`
pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

fn openapi_document() -> Value {
    let error = json!({
        "type": "object",
        "properties": { "detail": { "type": "string" } },
        "required": ["detail"]
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Redirector",
            "description": "Redirector",
            "version": env!("CARGO_PKG_VERSION")
        },
        "components": {
            "securitySchemes": {
                "HTTPBearer": { "type": "http", "scheme": "bearer" }
            },
            "schemas": {
                "CreateURLResponse": {
                    "type": "object",
                    "properties": {
                        "alias": { "type": "string" },
                        "short_url": { "type": "string" },
                        "expire_dt": { "type": "string" }
                    },
                    "required": ["alias", "short_url", "expire_dt"]
                },
                "HTTPError": error
            }
        },
        "paths": {
            "/{alias}": {
                "get": {
                    "summary": "Find and Redirect URLs",
                    "parameters": [{
                        "name": "alias", "in": "path", "required": true,
                        "schema": { "type": "string" }
                    }],
                    "responses": {
                        "307": { "description": "Redirect to the stored URL" },
                        "404": {
                            "description": "Unknown alias",
                            "content": { "application/json": {
                                "schema": { "$ref": "#/components/schemas/HTTPError" }
                            }}
                        }
                    }
                }
            },
            "/create_url": {
                "post": {
                    "summary": "Create URL",
                    "security": [{ "HTTPBearer": [] }],
                    "parameters": [
                        {
                            "name": "original_url", "in": "query", "required": true,
                            "schema": { "type": "string" }
                        },
                        {
                            "name": "custom_alias", "in": "query", "required": false,
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Created",
                            "content": { "application/json": {
                                "schema": { "$ref": "#/components/schemas/CreateURLResponse" }
                            }}
                        },
                        "400": { "description": "Custom alias already used or reserved" },
                        "401": { "description": "Unauthorized" },
                        "422": { "description": "Invalid query parameters" }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": {
                        "200": { "description": "Store reachable" },
                        "503": { "description": "Store unreachable" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_core_paths() {
        let doc = openapi_document();
        assert!(doc["paths"].get("/{alias}").is_some());
        assert!(doc["paths"].get("/create_url").is_some());
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_docs_template_renders_endpoints() {
        let html = DocsTemplate {
            title: "Redirector",
            version: "1.0.0",
            endpoints: ENDPOINTS,
        }
        .render()
        .unwrap();

        assert!(html.contains("/create_url"));
        assert!(html.contains("/openapi.json"));
    }
}
