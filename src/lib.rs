//! # showdeck
//!
//! A minimal static slideshow generator for photo/video galleries. Your
//! filesystem is the data source: each immediate subdirectory of `photos/`
//! becomes a *section*, its images and videos become slideshow entries, and
//! an optional `links.txt` adds external YouTube/Vimeo embeds. One run
//! produces one self-contained `index.html` at the project root.
//!
//! # Architecture: One-Pass Pipeline
//!
//! ```text
//! 1. Resolve   cwd        →  root / photos/ / index.html   (absolute paths)
//! 2. Scan      photos/    →  Manifest                      (filesystem → model)
//! 3. Generate  Manifest   →  index.html                    (model → document)
//! ```
//!
//! The scan is a pure function of the filesystem snapshot plus the wall-clock
//! date; the render is a pure function of the manifest, the config, and the
//! timestamp. All I/O is synchronous and single-threaded — the whole job is
//! one directory listing per section and one file write.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`paths`] | Resolves the project root, the photos directory, and the output file |
//! | [`config`] | Optional `config.toml`: title, slideshow behavior, colors |
//! | [`naming`] | Section directory name → fragment id slug + display title |
//! | [`order`] | Natural (numeric-aware, case-insensitive) name comparison |
//! | [`embed`] | `links.txt` URL → provider-canonical embed URL |
//! | [`scan`] | Walks `photos/`, classifies media, pairs posters, assembles the [`scan::Manifest`] |
//! | [`generate`] | Renders the document with Maud and atomically replaces `index.html` |
//! | [`output`] | CLI diagnostics — pure formatting plus stdout wrappers |
//!
//! # Design Decisions
//!
//! ## One Self-Contained Document
//!
//! The output is a single HTML file with an inline stylesheet and script.
//! There is nothing to deploy next to it except the media files it links
//! relatively; dropping the project directory on any static file server (or
//! opening `index.html` from disk) is the whole publishing story.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and interpolation is escaped by default — section
//! titles taken from directory names can never break the document.
//!
//! ## The Client Is Data, Not Codegen
//!
//! The slideshow script is one static asset (`static/player.js`) embedded at
//! compile time. The generator never synthesizes per-section JavaScript;
//! sections are rows in a JSON model and the controls carry their section
//! index in `data-*` attributes, handled by a single delegated listener.
//!
//! ## Recoverable Scan, Fatal Write
//!
//! A missing `photos/` tree or an unreadable section degrades to a warning
//! and a smaller (possibly empty) gallery — the skeleton page is still
//! emitted. Only an unreadable photos root, an invalid config, or a failed
//! output write abort the run with a non-zero exit.
//!
//! ## Known Limitation: Per-Day Cache Token
//!
//! Media URLs carry `?v=<YYYY-MM-DD>`. Regenerating twice on the same day
//! with different media yields identical query strings, so some CDNs may
//! serve the older bytes until the next day's build. The in-page Reload
//! control sidesteps this for videos with a per-click `t=` parameter.

pub mod config;
pub mod embed;
pub mod generate;
pub mod naming;
pub mod order;
pub mod output;
pub mod paths;
pub mod scan;
