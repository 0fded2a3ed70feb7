//! HTML site generation.
//!
//! Stage 2 of the vernissage build pipeline. Takes the load-stage manifest
//! and renders the final static site.
//!
//! ## Generated Pages
//!
//! - **Index** (`/index.html`): year-grouped, reverse-chronological project
//!   listing
//! - **Project pages** (`/projects/{slug}/index.html`): gallery of the
//!   works shown in the project, header with designer links and
//!   description, and the "All Projects" selector
//! - **Designer pages** (`/designers/{slug}/index.html`): a designer's
//!   works across all projects
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── projects/
//! │   └── glasswork/index.html
//! ├── designers/
//! │   └── mira-nakamura/index.html
//! └── images/works/...             # copied from content/images/
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating —
//! type-safe templates with automatic escaping of record-supplied text.
//! Project descriptions are markdown converted with pulldown-cmark; raw
//! HTML events in the markdown are dropped, not passed through, so records
//! can never inject markup.
//!
//! CSS (palette variables from config + embedded stylesheet) is inlined
//! into every page, and the hover-panel script is embedded on pages with a
//! gallery. The hovered-image state lives entirely in that script: one
//! panel element, last hover wins, cleared on unhover. No page fetches
//! anything at runtime.
//!
//! Pages are rendered in parallel (rayon) and written sequentially.

use crate::config;
use crate::links;
use crate::types::{Designer, Manifest};
use crate::view::{self, ImageItem, NavSection};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No project with slug '{0}' in the manifest")]
    UnknownProject(String),
    #[error("Project '{project}' references designer '{designer}' not in the manifest")]
    UnknownDesigner { project: String, designer: String },
}

pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, source_dir, output_dir)
}

/// Render every page of the site into `output_dir`.
pub fn generate_site(
    manifest: &Manifest,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let css = page_css(&manifest.config);

    fs::create_dir_all(output_dir)?;

    // Work images ship verbatim from the content tree.
    let images_src = source_dir.join("images");
    if images_src.is_dir() {
        copy_dir_recursive(&images_src, &output_dir.join("images"))?;
    }

    let index = render_index(manifest, &css);
    fs::write(output_dir.join("index.html"), index.into_string())?;

    // Render in parallel, write sequentially.
    let project_pages: Vec<(PathBuf, String)> = manifest
        .projects
        .par_iter()
        .map(|project| {
            let page = render_project_page(manifest, &project.slug, &css)?;
            let path = output_dir
                .join("projects")
                .join(&project.slug)
                .join("index.html");
            Ok((path, page.into_string()))
        })
        .collect::<Result<_, GenerateError>>()?;

    let designer_pages: Vec<(PathBuf, String)> = manifest
        .designers
        .par_iter()
        .map(|designer| {
            let page = render_designer_page(designer, manifest, &css);
            let path = output_dir
                .join("designers")
                .join(&designer.slug)
                .join("index.html");
            (path, page.into_string())
        })
        .collect();

    for (path, html) in project_pages.into_iter().chain(designer_pages) {
        fs::create_dir_all(path.parent().expect("page path has a parent"))?;
        fs::write(&path, html)?;
    }

    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const HOVER_JS: &str = include_str!("../static/hover.js");

/// Palette variables from config followed by the embedded stylesheet.
fn page_css(site_config: &config::SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&site_config.colors),
        CSS_STATIC
    )
}

/// Convert a markdown description to HTML, dropping raw HTML events.
///
/// Descriptions come from content records; markdown formatting is welcome
/// but embedded markup is discarded rather than trusted.
fn render_description(markdown: &str) -> String {
    let parser = Parser::new(markdown)
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Site header: gallery name linking home.
fn site_header(site_title: &str) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (site_title) }
        }
    }
}

/// The gallery: one figure per image item, hover texts as a data attribute
/// for the hover panel script.
fn render_gallery(items: &[ImageItem<'_>]) -> Markup {
    html! {
        div.gallery {
            @for item in items {
                figure.gallery-item data-hover-texts=(item.texts.join("\n")) {
                    img src=(item.src)
                        alt={ (item.work.title) " — " (item.designer.name) }
                        loading="lazy";
                }
            }
        }
    }
}

/// The collapsed "All Projects" selector: one section per year, newest
/// first, current project marked.
fn render_selector(sections: &[NavSection], current_link: &str) -> Markup {
    html! {
        details.selector {
            summary { "All Projects" }
            @for section in sections {
                section.selector-year {
                    h3 { (section.title) }
                    ul {
                        @for item in &section.items {
                            @let is_current = item.link == current_link;
                            li class=[is_current.then_some("current")] {
                                a href=(item.link) { (item.title) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The hover-info panel plus the script that drives it.
fn hover_panel() -> Markup {
    html! {
        aside.hover-info hidden {}
        script { (PreEscaped(HOVER_JS)) }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index page: year-grouped project listing, newest year first.
fn render_index(manifest: &Manifest, css: &str) -> Markup {
    let groups = view::group_projects_by_year(&manifest.projects);
    let sections = view::build_nav_sections(&groups, links::project_link);
    let site_title = &manifest.config.site.title;

    let content = html! {
        (site_header(site_title))
        main.index-page {
            @for section in &sections {
                section.year-group {
                    h2 { (section.title) }
                    ul.project-list {
                        @for item in &section.items {
                            li { a href=(item.link) { (item.title) } }
                        }
                    }
                }
            }
        }
    };

    base_document(site_title, css, content)
}

/// Renders a project page.
///
/// The slug must name a project in the manifest; an unknown slug is a hard
/// error — a page must never be built against a slug the collection does
/// not contain. Dangling designer references are likewise refused (load
/// validation catches both long before this runs).
pub fn render_project_page(
    manifest: &Manifest,
    slug: &str,
    css: &str,
) -> Result<Markup, GenerateError> {
    let project = view::resolve_project(&manifest.projects, slug)
        .ok_or_else(|| GenerateError::UnknownProject(slug.to_string()))?;

    let resolve_designer = view::designer_resolver(&manifest.designers);
    let designers: Vec<&Designer> = project
        .designers
        .iter()
        .map(|d| {
            resolve_designer(d).ok_or_else(|| GenerateError::UnknownDesigner {
                project: project.slug.clone(),
                designer: d.clone(),
            })
        })
        .collect::<Result<_, _>>()?;

    let images = view::build_image_list(
        &manifest.designers,
        slug,
        manifest.config.gallery.repeat_factor,
        links::work_image_path,
    );

    let groups = view::group_projects_by_year(&manifest.projects);
    let sections = view::build_nav_sections(&groups, links::project_link);
    let current_link = links::project_link(slug);

    let site_title = &manifest.config.site.title;
    let page_title = format!("{} — Projects — {}", site_title, project.title);
    let description = render_description(&project.description);

    let content = html! {
        (site_header(site_title))
        main.project-page {
            div.gallery-pane {
                (render_gallery(&images))
            }
            div.detail-pane {
                header.project-header {
                    h1 { (project.title) }
                    div.project-designers {
                        @for designer in &designers {
                            span.project-designer {
                                a href=(links::designer_link(&designer.slug)) {
                                    (designer.name)
                                }
                            }
                        }
                    }
                    div.project-when { (project.when) }
                    div.project-description { (PreEscaped(description)) }
                }
                (render_selector(&sections, &current_link))
                (hover_panel())
            }
        }
    };

    Ok(base_document(&page_title, css, content))
}

/// Renders a designer page: all of the designer's works, whatever project
/// they belong to.
fn render_designer_page(designer: &Designer, manifest: &Manifest, css: &str) -> Markup {
    let items: Vec<ImageItem<'_>> = designer
        .works
        .iter()
        .filter_map(|work| {
            let cover = work.images.first()?;
            Some(ImageItem {
                work,
                designer,
                src: links::work_image_path(cover),
                texts: view::work_image_texts(work, designer),
            })
        })
        .collect();

    let site_title = &manifest.config.site.title;
    let page_title = format!("{} — Designers — {}", site_title, designer.name);

    let content = html! {
        (site_header(site_title))
        main.designer-page {
            div.gallery-pane {
                (render_gallery(&items))
            }
            div.detail-pane {
                header.designer-header {
                    h1 { (designer.name) }
                }
                (hover_panel())
            }
        }
    };

    base_document(&page_title, css, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{find_project, sample_manifest};
    use tempfile::TempDir;

    #[test]
    fn index_groups_projects_newest_year_first() {
        let manifest = sample_manifest();
        let html = render_index(&manifest, "").into_string();

        let pos_2021 = html.find("<h2>2021</h2>").unwrap();
        let pos_2020 = html.find("<h2>2020</h2>").unwrap();
        let pos_2018 = html.find("<h2>2018</h2>").unwrap();
        assert!(pos_2021 < pos_2020 && pos_2020 < pos_2018);
    }

    #[test]
    fn index_links_every_project() {
        let manifest = sample_manifest();
        let html = render_index(&manifest, "").into_string();
        for project in &manifest.projects {
            assert!(html.contains(&links::project_link(&project.slug)));
        }
    }

    #[test]
    fn project_page_includes_header_fields() {
        let manifest = sample_manifest();
        let project = find_project(&manifest.projects, "glasswork");
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();

        assert!(html.contains(&format!("<h1>{}</h1>", project.title)));
        assert!(html.contains("2021"));
        assert!(html.contains("Mira Nakamura"));
        assert!(html.contains("/designers/mira-nakamura/"));
        assert!(html.contains("/designers/otto-lindqvist/"));
    }

    #[test]
    fn project_page_gallery_has_one_figure_per_matching_work() {
        let manifest = sample_manifest();
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();

        // Three works match "glasswork"; repeat_factor is 1.
        assert_eq!(html.matches("<figure").count(), 3);
        assert!(html.contains("/images/works/tide-vessel-1.jpg"));
        assert!(html.contains("/images/works/fold-screen-1.jpg"));
    }

    #[test]
    fn repeat_factor_multiplies_gallery_figures() {
        let mut manifest = sample_manifest();
        manifest.config.gallery.repeat_factor = 10;
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();
        assert_eq!(html.matches("<figure").count(), 30);
    }

    #[test]
    fn project_page_with_no_matching_works_renders_empty_gallery() {
        let mut manifest = sample_manifest();
        // soft-geometry matches one work; detach it.
        for designer in &mut manifest.designers {
            for work in &mut designer.works {
                work.projects.retain(|p| p != "soft-geometry");
            }
        }
        let html = render_project_page(&manifest, "soft-geometry", "")
            .unwrap()
            .into_string();
        assert_eq!(html.matches("<figure").count(), 0);
        assert!(html.contains("<h1>Soft Geometry</h1>"));
    }

    #[test]
    fn unknown_project_slug_is_refused() {
        let manifest = sample_manifest();
        let err = render_project_page(&manifest, "no-such-project", "").unwrap_err();
        assert!(matches!(err, GenerateError::UnknownProject(slug) if slug == "no-such-project"));
    }

    #[test]
    fn dangling_designer_reference_is_refused() {
        let mut manifest = sample_manifest();
        manifest.projects[0]
            .designers
            .push("vanished".to_string());
        let err = render_project_page(&manifest, "glasswork", "").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnknownDesigner { designer, .. } if designer == "vanished"
        ));
    }

    #[test]
    fn selector_marks_current_project_only() {
        let manifest = sample_manifest();
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();
        assert_eq!(html.matches(r#"class="current""#).count(), 1);
        // Every project appears in the selector.
        for project in &manifest.projects {
            assert!(html.contains(&project.title));
        }
    }

    #[test]
    fn gallery_figures_carry_hover_texts() {
        let manifest = sample_manifest();
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();
        assert!(html.contains("data-hover-texts"));
        assert!(html.contains("Blown glass, cast bronze base"));
        assert!(html.contains("$4,800"));
        assert!(html.contains("hover-info"));
    }

    #[test]
    fn description_markdown_is_rendered() {
        let manifest = sample_manifest();
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();
        assert!(html.contains("<strong>lamps</strong>"));
    }

    #[test]
    fn description_raw_html_is_dropped() {
        let mut manifest = sample_manifest();
        manifest.projects[0].description =
            "Fine *work* <script>alert('xss')</script> indeed.".to_string();
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("<em>work</em>"));
    }

    #[test]
    fn record_text_is_escaped() {
        let mut manifest = sample_manifest();
        manifest.projects[0].title = "<b>Bold</b> Claim".to_string();
        let html = render_project_page(&manifest, "glasswork", "")
            .unwrap()
            .into_string();
        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn designer_page_lists_all_works() {
        let manifest = sample_manifest();
        let designer = &manifest.designers[0];
        let html = render_designer_page(designer, &manifest, "").into_string();

        assert!(html.contains("<h1>Mira Nakamura</h1>"));
        assert_eq!(html.matches("<figure").count(), designer.works.len());
    }

    #[test]
    fn generate_site_writes_expected_tree() {
        let manifest = sample_manifest();
        let source = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        generate_site(&manifest, source.path(), out.path()).unwrap();

        assert!(out.path().join("index.html").exists());
        for project in &manifest.projects {
            assert!(
                out.path()
                    .join("projects")
                    .join(&project.slug)
                    .join("index.html")
                    .exists()
            );
        }
        for designer in &manifest.designers {
            assert!(
                out.path()
                    .join("designers")
                    .join(&designer.slug)
                    .join("index.html")
                    .exists()
            );
        }
    }

    #[test]
    fn generate_site_copies_work_images() {
        let manifest = sample_manifest();
        let source = TempDir::new().unwrap();
        let works_dir = source.path().join("images/works");
        fs::create_dir_all(&works_dir).unwrap();
        fs::write(works_dir.join("tide-vessel-1.jpg"), b"fake image").unwrap();

        let out = TempDir::new().unwrap();
        generate_site(&manifest, source.path(), out.path()).unwrap();

        assert!(out.path().join("images/works/tide-vessel-1.jpg").exists());
    }

    #[test]
    fn pages_inline_palette_css() {
        let manifest = sample_manifest();
        let css = page_css(&manifest.config);
        let html = render_index(&manifest, &css).into_string();
        assert!(html.contains("--color-bg: #ffffff"));
    }
}
