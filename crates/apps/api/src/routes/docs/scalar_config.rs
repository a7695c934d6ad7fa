//! This module provides a function to generate custom HTML for the `OpenAPI` documentation.

use serde_json::to_string_pretty;
use utoipa::openapi::OpenApi;

/// Generates a custom HTML page for the Scalar API reference UI.
///
/// # Errors
///
/// Returns an error if the provided `OpenApi` struct cannot be serialized to a JSON string.
pub fn get_custom_html(open_api: &OpenApi) -> serde_json::Result<String> {
    let json = to_string_pretty(open_api)?;

    Ok(format!(
        r#"<!doctype html>
<html>
  <head>
    <title>Photo Albums API Reference</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <div id="app"></div>

    <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
    <script>
      Scalar.createApiReference('#app', {{
        "content": {json},
        "layout": "classic",
        "showSidebar": true,
        "withDefaultFonts": true
      }})
    </script>
  </body>
</html>
"#,
    ))
}
