//! Compile-time configuration for the frontend.

/// Base URL the site is served from
/// - Local development / root hosting: "/"
/// - GitHub Pages: "/tecnicas_java/"
#[cfg(not(feature = "gh-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "gh-pages")]
pub const BASE_URL: &str = "/tecnicas_java/";

/// Downloadable companion document linked from the footer.
pub const DOCUMENT_PDF: &str = "TecnicasJava.pdf";

pub const JAVA_LOGO: &str = "java-logo.png";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
