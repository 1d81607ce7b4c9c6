//! Build-time deployment configuration.

/// URL prefix under which the site's static assets are served.
///
/// Injected at build time through `PORTFOLIO_BASE_PATH` and resolved
/// once here; components never inspect the environment themselves.
/// Defaults to the site root.
pub fn base_path() -> &'static str {
    option_env!("PORTFOLIO_BASE_PATH").unwrap_or("")
}
