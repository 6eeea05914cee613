//! UI module for the dashboard wrapper page
//!
//! Renders the outer page that hosts the built frontend bundle inside a
//! sandboxed iframe component, or an inline error block when the bundle is
//! missing. Title, heading, component geometry, and the error text are
//! fixed.

/// HTML document title, set in both the success and failure paths.
pub const PAGE_TITLE: &str = "EnviroTrack AI Monitoring System";

/// Heading rendered above the component in both paths.
pub const PAGE_HEADING: &str = "🌎 EnviroTrack AI Monitoring Dashboard";

/// Fixed component viewport.
pub const COMPONENT_WIDTH: u32 = 1400;
pub const COMPONENT_HEIGHT: u32 = 900;

/// Route the component iframe loads the bundle from.
pub const COMPONENT_SRC: &str = "/component/bundle";

/// User-facing error shown inline when the bundle is absent.
pub const MISSING_BUNDLE_MESSAGE: &str =
    "index.html not found. Please ensure you have built the project and 'dist/index.html' exists.";

/// Render the dashboard page.
///
/// The wrapper carries the title, wide layout, and heading either way;
/// only the component area differs between the two variants.
pub fn dashboard_page(bundle_present: bool) -> String {
    let component = if bundle_present {
        format!(
            r#"<iframe class="component" src="{COMPONENT_SRC}" width="{COMPONENT_WIDTH}" height="{COMPONENT_HEIGHT}" sandbox="allow-scripts allow-same-origin allow-forms allow-popups allow-downloads"></iframe>"#
        )
    } else {
        format!(r#"<div class="error" role="alert">{MISSING_BUNDLE_MESSAGE}</div>"#)
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>
  body {{ margin: 0; padding: 1rem 2rem; background: #0e1117; color: #fafafa; font-family: -apple-system, "Segoe UI", sans-serif; }}
  main {{ width: 100%; max-width: none; }}
  h1 {{ font-size: 1.75rem; font-weight: 600; }}
  iframe.component {{ border: none; max-width: 100%; }}
  div.error {{ padding: 1rem; border: 1px solid #ff4b4b; border-radius: 0.5rem; background: #3d1c1f; color: #ffb3b3; }}
</style>
</head>
<body>
<main>
<h1>{PAGE_HEADING}</h1>
{component}
</main>
</body>
</html>
"#
    )
}
