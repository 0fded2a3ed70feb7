//! Shared record types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (load → generate)
//! and must be identical across both modules. They are also the shape of
//! the TOML records under `content/projects/` and `content/designers/`.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};

/// Everything the generate stage needs, written by the load stage as
/// `manifest.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub projects: Vec<Project>,
    pub designers: Vec<Designer>,
    pub config: SiteConfig,
}

/// A project: a themed collection of designer works presented on one page.
///
/// Projects are loaded from `content/projects/*.toml`, one per file.
/// Collection order is sorted file-path order, which also fixes the
/// relative order of projects inside a year group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique URL slug, referenced by works via their `projects` list.
    pub slug: String,
    pub title: String,
    /// Markdown body shown in the project header. Raw HTML in the
    /// markdown is dropped at render time, never passed through.
    #[serde(default)]
    pub description: String,
    /// Exhibition year. Numeric because the index and selector sort
    /// years reverse-chronologically.
    pub when: u16,
    /// Slugs of the participating designers, in display order.
    #[serde(default)]
    pub designers: Vec<String>,
}

/// A designer owning an ordered sequence of works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Designer {
    /// Unique URL slug, referenced by projects via their `designers` list.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub works: Vec<Work>,
}

/// A single design object with its own metadata and image set.
///
/// A work belongs to zero or more projects by slug membership. Its first
/// image is the cover shown in project galleries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub slug: String,
    pub title: String,
    /// Display text, not a sortable year ("2016–17", "c. 1984").
    #[serde(default)]
    pub when: String,
    /// Slugs of the projects this work appears in.
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Image identifiers, first is the cover. Never empty after load
    /// validation.
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}
