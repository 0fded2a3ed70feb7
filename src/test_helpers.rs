//! Shared test utilities for the vernissage test suite.
//!
//! Provides a small in-memory gallery — two designers, four projects across
//! three years — plus lookup helpers that panic with the list of available
//! slugs on a miss.
//!
//! The sample data covers the interesting shapes: a project with works from
//! both designers, a work belonging to two projects, a year with two
//! projects, and a project whose works live under a single designer.

use crate::config::SiteConfig;
use crate::types::{Designer, Manifest, Project, Work};

// =========================================================================
// Sample gallery
// =========================================================================

/// Four projects: two in 2021 (order matters for grouping tests), one in
/// 2020, one in 2018.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            slug: "glasswork".to_string(),
            title: "Glasswork".to_string(),
            description: "Vessels and **lamps** in studio glass.".to_string(),
            when: 2021,
            designers: vec!["mira-nakamura".to_string(), "otto-lindqvist".to_string()],
        },
        Project {
            slug: "soft-geometry".to_string(),
            title: "Soft Geometry".to_string(),
            description: "Folded planes, rounded edges.".to_string(),
            when: 2021,
            designers: vec!["otto-lindqvist".to_string()],
        },
        Project {
            slug: "night-forms".to_string(),
            title: "Night Forms".to_string(),
            description: "Light objects after dark.".to_string(),
            when: 2020,
            designers: vec!["mira-nakamura".to_string()],
        },
        Project {
            slug: "north-light".to_string(),
            title: "North Light".to_string(),
            description: "Furniture for long winters.".to_string(),
            when: 2018,
            designers: vec!["otto-lindqvist".to_string()],
        },
    ]
}

pub fn sample_designers() -> Vec<Designer> {
    vec![
        Designer {
            slug: "mira-nakamura".to_string(),
            name: "Mira Nakamura".to_string(),
            works: vec![
                Work {
                    slug: "tide-vessel".to_string(),
                    title: "Tide Vessel".to_string(),
                    when: "2019".to_string(),
                    projects: vec!["glasswork".to_string()],
                    tags: vec!["vessel".to_string(), "glass".to_string()],
                    images: vec![
                        "tide-vessel-1.jpg".to_string(),
                        "tide-vessel-2.jpg".to_string(),
                    ],
                    caption: Some("Blown glass, cast bronze base".to_string()),
                    price: Some("$4,800".to_string()),
                },
                Work {
                    slug: "ember-lamp".to_string(),
                    title: "Ember Lamp".to_string(),
                    when: "2020".to_string(),
                    projects: vec!["glasswork".to_string(), "night-forms".to_string()],
                    tags: vec!["lighting".to_string()],
                    images: vec!["ember-lamp-1.jpg".to_string()],
                    caption: Some("Sandblasted glass, brass".to_string()),
                    price: None,
                },
            ],
        },
        Designer {
            slug: "otto-lindqvist".to_string(),
            name: "Otto Lindqvist".to_string(),
            works: vec![
                Work {
                    slug: "fold-screen".to_string(),
                    title: "Fold Screen".to_string(),
                    when: "2021".to_string(),
                    projects: vec!["glasswork".to_string(), "soft-geometry".to_string()],
                    tags: vec![],
                    images: vec![
                        "fold-screen-1.jpg".to_string(),
                        "fold-screen-2.jpg".to_string(),
                    ],
                    caption: None,
                    price: Some("$12,000".to_string()),
                },
                Work {
                    slug: "birch-bench".to_string(),
                    title: "Birch Bench".to_string(),
                    when: "2018".to_string(),
                    projects: vec!["north-light".to_string()],
                    tags: vec!["furniture".to_string()],
                    images: vec!["birch-bench-1.jpg".to_string()],
                    caption: Some("Steam-bent birch".to_string()),
                    price: None,
                },
            ],
        },
    ]
}

/// The sample gallery as a full manifest with stock config.
pub fn sample_manifest() -> Manifest {
    Manifest {
        projects: sample_projects(),
        designers: sample_designers(),
        config: SiteConfig::default(),
    }
}

/// Build a minimal work: slug, project membership, images. Title is the
/// slug with dash-words capitalized; remaining fields stay empty.
pub fn work(slug: &str, projects: &[&str], images: &[&str]) -> Work {
    let title = slug
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Work {
        slug: slug.to_string(),
        title,
        when: "2017".to_string(),
        projects: projects.iter().map(|s| s.to_string()).collect(),
        tags: vec![],
        images: images.iter().map(|s| s.to_string()).collect(),
        caption: None,
        price: None,
    }
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Find a project by slug. Panics if not found.
pub fn find_project<'a>(projects: &'a [Project], slug: &str) -> &'a Project {
    projects
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
            panic!("project '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a designer's work by slug. Panics if not found.
pub fn find_work<'a>(designer: &'a Designer, slug: &str) -> &'a Work {
    designer
        .works
        .iter()
        .find(|w| w.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = designer.works.iter().map(|w| w.slug.as_str()).collect();
            panic!(
                "work '{slug}' not found for designer '{}'. Available: {slugs:?}",
                designer.slug
            )
        })
}
