//! Content loading and manifest generation.
//!
//! Stage 1 of the vernissage build pipeline. Reads the content directory of
//! TOML records, validates the collections, and produces the manifest the
//! generate stage consumes.
//!
//! ## Content Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── projects/
//! │   ├── glasswork.toml           # One project per file
//! │   └── 2018/
//! │       └── north-light.toml     # Subdirectories allowed, purely organizational
//! └── designers/
//!     ├── mira-nakamura.toml       # One designer per file, works inline
//!     └── otto-lindqvist.toml
//! ```
//!
//! Records are discovered recursively and parsed in sorted path order, so
//! collection order — and with it the relative order of projects inside a
//! year group — is deterministic and controllable by file naming.
//!
//! ## Record Format
//!
//! ```toml
//! # projects/glasswork.toml
//! slug = "glasswork"
//! title = "Glasswork"
//! description = "Vessels and **lamps** in studio glass."   # markdown
//! when = 2021
//! designers = ["mira-nakamura", "otto-lindqvist"]
//! ```
//!
//! ```toml
//! # designers/mira-nakamura.toml
//! slug = "mira-nakamura"
//! name = "Mira Nakamura"
//!
//! [[works]]
//! slug = "tide-vessel"
//! title = "Tide Vessel"
//! when = "2019"
//! projects = ["glasswork"]
//! tags = ["vessel", "glass"]
//! images = ["tide-vessel-1.jpg", "tide-vessel-2.jpg"]   # first is the cover
//! caption = "Blown glass, cast bronze base"
//! price = "$4,800"
//! ```
//!
//! ## Validation
//!
//! Cross-references are checked here, once, so later stages can resolve
//! slugs without guarding every lookup:
//! - No duplicate project or designer slugs
//! - Every designer slug a project lists must exist
//! - Every project slug a work lists must exist
//! - Every work carries at least one image (the first is its gallery cover)
//!
//! A violation fails the build loudly. There is no partial-failure mode:
//! either the whole content tree is consistent or no site is produced.

use crate::config;
use crate::types::{Designer, Manifest, Project};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid record {path}: {source}")]
    Record {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
    #[error("Duplicate project slug '{slug}' in {path}")]
    DuplicateProjectSlug { slug: String, path: PathBuf },
    #[error("Duplicate designer slug '{slug}' in {path}")]
    DuplicateDesignerSlug { slug: String, path: PathBuf },
    #[error("Project '{project}' lists unknown designer '{designer}'")]
    UnknownDesigner { project: String, designer: String },
    #[error("Work '{work}' of designer '{designer}' references unknown project '{project}'")]
    UnknownProject {
        designer: String,
        work: String,
        project: String,
    },
    #[error("Work '{work}' of designer '{designer}' has no images")]
    NoImages { designer: String, work: String },
}

pub fn load(root: &Path) -> Result<Manifest, LoadError> {
    let projects = read_records::<Project>(&root.join("projects"))?;
    let designers = read_records::<Designer>(&root.join("designers"))?;

    check_unique_slugs(&projects, &designers)?;

    let config = config::load_config(root)?;

    let projects: Vec<Project> = projects.into_iter().map(|(_, p)| p).collect();
    let designers: Vec<Designer> = designers.into_iter().map(|(_, d)| d).collect();

    check_references(&projects, &designers)?;

    Ok(Manifest {
        projects,
        designers,
        config,
    })
}

/// Collect and parse all `.toml` records under a directory, recursively,
/// in sorted path order. A missing directory is an empty collection.
fn read_records<T: DeserializeOwned>(dir: &Path) -> Result<Vec<(PathBuf, T)>, LoadError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let is_toml = entry
            .path()
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        if entry.file_type().is_file() && is_toml {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path)?;
        let record = toml::from_str(&content).map_err(|source| LoadError::Record {
            path: path.clone(),
            source: Box::new(source),
        })?;
        records.push((path, record));
    }
    Ok(records)
}

fn check_unique_slugs(
    projects: &[(PathBuf, Project)],
    designers: &[(PathBuf, Designer)],
) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for (path, project) in projects {
        if !seen.insert(project.slug.as_str()) {
            return Err(LoadError::DuplicateProjectSlug {
                slug: project.slug.clone(),
                path: path.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for (path, designer) in designers {
        if !seen.insert(designer.slug.as_str()) {
            return Err(LoadError::DuplicateDesignerSlug {
                slug: designer.slug.clone(),
                path: path.clone(),
            });
        }
    }
    Ok(())
}

fn check_references(projects: &[Project], designers: &[Designer]) -> Result<(), LoadError> {
    let project_slugs: HashSet<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    let designer_slugs: HashSet<&str> = designers.iter().map(|d| d.slug.as_str()).collect();

    for project in projects {
        for designer in &project.designers {
            if !designer_slugs.contains(designer.as_str()) {
                return Err(LoadError::UnknownDesigner {
                    project: project.slug.clone(),
                    designer: designer.clone(),
                });
            }
        }
    }

    for designer in designers {
        for work in &designer.works {
            if work.images.is_empty() {
                return Err(LoadError::NoImages {
                    designer: designer.slug.clone(),
                    work: work.slug.clone(),
                });
            }
            for project in &work.projects {
                if !project_slugs.contains(project.as_str()) {
                    return Err(LoadError::UnknownProject {
                        designer: designer.slug.clone(),
                        work: work.slug.clone(),
                        project: project.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}
