//! # Vernissage
//!
//! A minimal static site generator for design gallery portfolios. TOML
//! records are the data source: projects (exhibitions) reference designers,
//! designers carry their works, and each build renders project pages with
//! work galleries, designer pages, and a year-grouped index.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Vernissage processes content through two independent stages joined by a
//! JSON manifest:
//!
//! ```text
//! 1. Load      content/  →  manifest.json   (TOML records → validated collections)
//! 2. Generate  manifest  →  dist/           (final HTML site)
//! ```
//!
//! The split exists for the usual reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: generation is a pure function of the manifest, so
//!   page-rendering tests never touch the content directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Stage 1 — discovers and parses TOML records, validates cross-references, produces the manifest |
//! | [`view`] | Pure view-model derivation: project resolution, gallery image lists, year grouping, selector sections |
//! | [`generate`] | Stage 2 — renders the final HTML site from the manifest using Maud |
//! | [`links`] | Canonical site URLs and image paths |
//! | [`config`] | `config.toml` loading, validation, and CSS palette generation |
//! | [`types`] | Record types serialized between stages (`Project`, `Designer`, `Work`) |
//! | [`output`] | CLI output formatting — per-stage summaries |
//!
//! # Design Decisions
//!
//! ## Validation Up Front
//!
//! Every cross-reference (project → designer, work → project) is checked
//! once, at load time, and a dangling slug fails the build. Later stages
//! still refuse to render a page for a slug they cannot resolve — a page
//! built against missing data is worse than no build at all — but in a
//! validated manifest those guards never fire.
//!
//! ## Derivation Is Pure
//!
//! The [`view`] module borrows from the manifest and returns fresh derived
//! structures per page: nothing is cached between renders and nothing is
//! mutated in place. The only interactive state on a generated page — which
//! gallery image is hovered — lives in ~30 lines of embedded JavaScript,
//! not in Rust.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped — record
//! text can never inject markup. Project descriptions are markdown run
//! through pulldown-cmark with raw HTML events dropped.
//!
//! ## TOML Records, One Per File
//!
//! Each project and designer is a single TOML file; collections are the
//! sorted file-path order. Adding a record is creating a file, reordering
//! is renaming, and every record diffs cleanly in version control. No
//! database, no front-matter, no separate ordering file.

pub mod config;
pub mod generate;
pub mod links;
pub mod load;
pub mod output;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
