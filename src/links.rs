//! Canonical site URLs and image paths.
//!
//! Every page that references a project, a designer, or a work image goes
//! through these builders, so the URL scheme lives in exactly one place:
//!
//! - `project_link("fragiles")` → `/projects/fragiles/`
//! - `designer_link("gaetano-pesce")` → `/designers/gaetano-pesce/`
//! - `work_image_path("pratt-chair-1.jpg")` → `/images/works/pratt-chair-1.jpg`
//!
//! All three are pure string builders. The view layer never constructs a
//! URL itself — it takes these as closures and uses the result verbatim,
//! which keeps the derivation code independent of the site layout.

/// URL of a project page.
pub fn project_link(slug: &str) -> String {
    format!("/projects/{slug}/")
}

/// URL of a designer page.
pub fn designer_link(slug: &str) -> String {
    format!("/designers/{slug}/")
}

/// Path of a work image, relative to the site root.
///
/// Image identifiers in work records are bare filenames; the generator
/// copies them under `images/works/` in the output tree.
pub fn work_image_path(image_id: &str) -> String {
    format!("/images/works/{image_id}")
}
