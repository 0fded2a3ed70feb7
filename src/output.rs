//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity — positional index plus title — with counts and
//! destinations as trailing detail. Each stage has a `format_*` function
//! returning lines (pure, testable) and a `print_*` wrapper that writes
//! them to stdout.
//!
//! ## Load
//!
//! ```text
//! Projects
//! 001 Glasswork (2021, 3 works shown)
//! 002 Soft Geometry (2021, 1 work shown)
//!
//! Designers
//! 001 Mira Nakamura (2 works)
//! 002 Otto Lindqvist (2 works)
//!
//! Loaded 4 projects, 2 designers
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//!
//! Projects
//! 001 Glasswork → projects/glasswork/index.html
//!
//! Designers
//! 001 Mira Nakamura → designers/mira-nakamura/index.html
//!
//! Generated 4 project pages, 2 designer pages
//! ```

use crate::types::Manifest;
use crate::view;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Lines describing a loaded manifest.
pub fn format_load_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    for (pos, project) in manifest.projects.iter().enumerate() {
        // Gallery size at repeat factor 1 — how many works the page shows.
        let shown =
            view::build_image_list(&manifest.designers, &project.slug, 1, |id| id.to_string())
                .len();
        lines.push(format!(
            "{} {} ({}, {} shown)",
            format_index(pos + 1),
            project.title,
            project.when,
            pluralize(shown, "work"),
        ));
    }

    lines.push(String::new());
    lines.push("Designers".to_string());
    for (pos, designer) in manifest.designers.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(pos + 1),
            designer.name,
            pluralize(designer.works.len(), "work"),
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Loaded {}, {}",
        pluralize(manifest.projects.len(), "project"),
        pluralize(manifest.designers.len(), "designer"),
    ));
    lines
}

pub fn print_load_output(manifest: &Manifest) {
    for line in format_load_output(manifest) {
        println!("{line}");
    }
}

/// Lines describing the generated page tree.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home → index.html".to_string());
    lines.push(String::new());

    lines.push("Projects".to_string());
    for (pos, project) in manifest.projects.iter().enumerate() {
        lines.push(format!(
            "{} {} → projects/{}/index.html",
            format_index(pos + 1),
            project.title,
            project.slug,
        ));
    }

    lines.push(String::new());
    lines.push("Designers".to_string());
    for (pos, designer) in manifest.designers.iter().enumerate() {
        lines.push(format!(
            "{} {} → designers/{}/index.html",
            format_index(pos + 1),
            designer.name,
            designer.slug,
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        pluralize(manifest.projects.len(), "project page"),
        pluralize(manifest.designers.len(), "designer page"),
    ));
    lines
}

pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{line}");
    }
}
