//! View-model derivation for gallery pages.
//!
//! Everything a page template needs — the resolved current project, the
//! gallery image list, the year-grouped project selector — is derived here
//! from the loaded collections. The functions are pure: they borrow from
//! the manifest, allocate only the derived structures, and do no I/O.
//! Each render recomputes its view model from scratch; nothing here is
//! cached or mutated in place.
//!
//! ## Lookup semantics
//!
//! Lookups ([`resolve_project`], [`find_designer`]) return `Option` and
//! never panic. A `None` for a slug the content refers to is a data
//! mismatch that load-time validation should have caught; the generate
//! stage converts it into a hard error before touching any field, rather
//! than rendering a partial page.
//!
//! Lookups are linear scans. Collections are a few dozen records at most,
//! so an O(n) scan per call beats building an index every render. If the
//! gallery ever grows past that, replace these with a `HashMap` keyed by
//! slug built once per render pass.
//!
//! ## URL and path resolution
//!
//! The derivation never builds a URL itself. [`build_image_list`] and
//! [`build_nav_sections`] take resolver closures (in practice the builders
//! from [`crate::links`]) and use the returned strings verbatim.

use crate::types::{Designer, Project, Work};

/// One gallery entry: a work's cover image with its designer context.
///
/// `texts` carries the hover-panel caption lines, precomputed by
/// [`work_image_texts`].
#[derive(Debug, Clone)]
pub struct ImageItem<'a> {
    pub work: &'a Work,
    pub designer: &'a Designer,
    /// Resolved path of the work's cover image (first of `work.images`).
    pub src: String,
    pub texts: Vec<String>,
}

/// All projects sharing one exhibition year, in collection order.
#[derive(Debug)]
pub struct YearGroup<'a> {
    pub year: u16,
    pub projects: Vec<&'a Project>,
}

/// One entry of the project selector.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub title: String,
    pub link: String,
}

/// A year section of the project selector.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    /// Section heading — the year, rendered as text.
    pub title: String,
    pub items: Vec<NavEntry>,
}

/// Find the project a page is being built for.
///
/// First match wins; load validation guarantees slugs are unique so there
/// is never more than one. `None` means the requested slug does not exist
/// in the collection — the caller must refuse to build the page.
pub fn resolve_project<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.slug == slug)
}

/// Resolve a designer slug to its record. O(n) scan per call.
pub fn find_designer<'a>(designers: &'a [Designer], slug: &str) -> Option<&'a Designer> {
    designers.iter().find(|d| d.slug == slug)
}

/// A reusable designer resolver over one collection.
///
/// Handy when a page resolves several slugs against the same snapshot;
/// each call is still a fresh [`find_designer`] scan.
pub fn designer_resolver<'a>(
    designers: &'a [Designer],
) -> impl Fn(&str) -> Option<&'a Designer> {
    move |slug| find_designer(designers, slug)
}

/// Caption lines for a work's hover panel.
///
/// Line order: designer name, then "title, when" (title alone when the
/// work has no date text), then caption and price when present.
pub fn work_image_texts(work: &Work, designer: &Designer) -> Vec<String> {
    let mut texts = vec![designer.name.clone()];
    if work.when.is_empty() {
        texts.push(work.title.clone());
    } else {
        texts.push(format!("{}, {}", work.title, work.when));
    }
    if let Some(caption) = &work.caption {
        texts.push(caption.clone());
    }
    if let Some(price) = &work.price {
        texts.push(price.clone());
    }
    texts
}

/// Build the gallery image list for a project page.
///
/// Walks designers in collection order and, per designer, their works in
/// record order, keeping works whose `projects` list contains
/// `project_slug`. Each match contributes one [`ImageItem`] with the
/// work's cover image resolved through `resolve_src`.
///
/// The full sequence is then repeated `repeat` times — `repeat` comes from
/// `gallery.repeat_factor` in the site config and defaults to 1. Larger
/// values exist to preview gallery layouts at density without duplicating
/// records. A project matching no works yields an empty list, which is a
/// valid state, not an error.
pub fn build_image_list<'a>(
    designers: &'a [Designer],
    project_slug: &str,
    repeat: usize,
    resolve_src: impl Fn(&str) -> String,
) -> Vec<ImageItem<'a>> {
    let mut items = Vec::new();
    for designer in designers {
        for work in &designer.works {
            if !work.projects.iter().any(|p| p == project_slug) {
                continue;
            }
            // Load validation rejects coverless works, but stay total here.
            let Some(cover) = work.images.first() else {
                continue;
            };
            items.push(ImageItem {
                work,
                designer,
                src: resolve_src(cover),
                texts: work_image_texts(work, designer),
            });
        }
    }

    match repeat {
        0 | 1 => items,
        n => {
            let base = items.clone();
            for _ in 1..n {
                items.extend(base.iter().cloned());
            }
            items
        }
    }
}

/// Group all projects by exhibition year, newest year first.
///
/// Years appear once each; within a year, projects keep their collection
/// order. The groups partition the input: every project lands in exactly
/// one group.
pub fn group_projects_by_year(projects: &[Project]) -> Vec<YearGroup<'_>> {
    let mut years: Vec<u16> = Vec::new();
    for project in projects {
        if !years.contains(&project.when) {
            years.push(project.when);
        }
    }
    years.sort_unstable_by(|a, b| b.cmp(a));

    years
        .into_iter()
        .map(|year| YearGroup {
            year,
            projects: projects.iter().filter(|p| p.when == year).collect(),
        })
        .collect()
}

/// Map year groups to selector sections.
///
/// Section and item order mirror the groups exactly; links come from the
/// supplied resolver.
pub fn build_nav_sections(
    groups: &[YearGroup<'_>],
    link: impl Fn(&str) -> String,
) -> Vec<NavSection> {
    groups
        .iter()
        .map(|group| NavSection {
            title: group.year.to_string(),
            items: group
                .projects
                .iter()
                .map(|project| NavEntry {
                    title: project.title.clone(),
                    link: link(&project.slug),
                })
                .collect(),
        })
        .collect()
}
