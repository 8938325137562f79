//! API documentation
//!
//! Generates the OpenAPI document served at `/openapi.json` and the two
//! viewer pages rendering it: Swagger UI at `/docs` and ReDoc at `/redoc`.

use serde_json::{json, Map, Value};

use super::demo::DEFAULT_NAME;
use super::router::Endpoint;
use crate::config::DocsConfig;

pub const OPENAPI_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";
pub const REDOC_PATH: &str = "/redoc";

/// Build the OpenAPI 3.1 document for the public endpoints
pub fn openapi_document(docs: &DocsConfig) -> Value {
    let mut paths = Map::new();

    for endpoint in Endpoint::PUBLIC {
        let mut operation = json!({
            "summary": endpoint.summary(),
            "operationId": endpoint.operation_id(),
            "responses": {
                "200": {
                    "description": "Successful Response",
                    "content": { "application/json": { "schema": {} } }
                }
            }
        });

        if endpoint == Endpoint::TestDebug {
            operation["parameters"] = json!([{
                "name": "name",
                "in": "query",
                "required": false,
                "schema": { "type": "string", "default": DEFAULT_NAME, "title": "Name" }
            }]);
        }

        let method = endpoint.method().as_str().to_ascii_lowercase();
        let mut item = Map::new();
        item.insert(method, operation);
        paths.insert(endpoint.path().to_string(), Value::Object(item));
    }

    json!({
        "openapi": "3.1.0",
        "info": { "title": docs.title, "version": docs.version },
        "paths": paths,
    })
}

/// Swagger UI page loading the document from `/openapi.json`
pub fn swagger_ui_html(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Swagger UI</title>
    <link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        const ui = SwaggerUIBundle({{
            url: '{OPENAPI_PATH}',
            dom_id: '#swagger-ui',
            layout: 'BaseLayout',
            deepLinking: true,
            showExtensions: true,
            showCommonExtensions: true,
            presets: [
                SwaggerUIBundle.presets.apis,
                SwaggerUIBundle.SwaggerUIStandalonePreset
            ],
        }})
    </script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// ReDoc page loading the document from `/openapi.json`
pub fn redoc_html(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title} - ReDoc</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link href="https://fonts.googleapis.com/css?family=Montserrat:300,400,700|Roboto:300,400,700" rel="stylesheet">
    <style>
        body {{
            margin: 0;
            padding: 0;
        }}
    </style>
</head>
<body>
    <noscript>
        ReDoc requires Javascript to function. Please enable it to browse the documentation.
    </noscript>
    <redoc spec-url="{OPENAPI_PATH}"></redoc>
    <script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[test]
    fn test_document_lists_public_routes() {
        let doc = openapi_document(&test_config().docs);
        assert_eq!(doc["openapi"], "3.1.0");
        assert_eq!(doc["info"]["title"], "fastp");

        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 4);
        assert!(paths["/"]["get"].is_object());
        assert!(paths["/debug-example"]["get"].is_object());
        assert!(paths["/test-debug"]["get"].is_object());
        assert!(paths["/test-hello"]["post"].is_object());
        assert!(paths.get(OPENAPI_PATH).is_none());
        assert!(paths.get(REDOC_PATH).is_none());
    }

    #[test]
    fn test_name_parameter_documented() {
        let doc = openapi_document(&test_config().docs);
        let param = &doc["paths"]["/test-debug"]["get"]["parameters"][0];
        assert_eq!(param["name"], "name");
        assert_eq!(param["in"], "query");
        assert_eq!(param["required"], false);
        assert_eq!(param["schema"]["default"], DEFAULT_NAME);
    }

    #[test]
    fn test_swagger_page_points_at_document() {
        let html = swagger_ui_html("<demo>");
        assert!(html.contains("url: '/openapi.json'"));
        assert!(html.contains("<title>&lt;demo&gt; - Swagger UI</title>"));
    }

    #[test]
    fn test_redoc_page_points_at_document() {
        let html = redoc_html("fastp & co");
        assert!(html.contains(r#"<redoc spec-url="/openapi.json"></redoc>"#));
        assert!(html.contains("redoc.standalone.js"));
        assert!(html.contains("<title>fastp &amp; co - ReDoc</title>"));
    }
}
