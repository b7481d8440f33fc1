//! HTML document generation.
//!
//! Takes the scanned [`Manifest`] and produces the single self-contained
//! `index.html`: one document with an inline stylesheet, one `<section>` per
//! gallery section, and the client slideshow script.
//!
//! ## Document Structure
//!
//! ```text
//! <head>        charset, viewport, color-scheme, configured title, <style>
//! <header>      site title + generation timestamp + cache version
//! <nav>         one #fragment anchor per section
//! <section>*    player container, Prev/Next/Reload controls,
//!               caption + meta regions, sidebar entry list
//! <footer>
//! <script>      VERSION / AUTO_ADVANCE_MS / EMBED_HEIGHT constants,
//!               the model as JSON, per-section cursors, player.js
//! ```
//!
//! The sidebar list is rendered server-side too (first entry active), so the
//! document is a readable inventory without JavaScript; the client script
//! re-renders it on interaction.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: presentation rules (colors injected from config)
//! - `static/player.js`: slideshow state machine
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is auto-escaped; `PreEscaped` is reserved for the
//! embedded CSS/JS, the script JSON, and rendered Markdown descriptions.
//!
//! ## Output Write
//!
//! The document is written to a temporary sibling file and renamed over
//! `index.html`, so a reader never observes a half-written document.

use crate::config::{self, SiteConfig};
use crate::scan::{Manifest, Section};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const PLAYER_JS: &str = include_str!("../static/player.js");

/// Render the document and atomically replace `output_file` with it.
pub fn generate(
    manifest: &Manifest,
    config: &SiteConfig,
    output_file: &Path,
    generated_at: &str,
) -> Result<(), GenerateError> {
    let doc = render_document(manifest, config, generated_at)?;
    write_atomic(output_file, doc.into_string().as_bytes())
}

/// Write via a temporary sibling + rename so readers never see a partial file.
fn write_atomic(output_file: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    let dir = output_file.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.persist(output_file)?;
    Ok(())
}

/// Render the complete HTML document.
///
/// Pure: the same manifest, config, and timestamp produce byte-identical
/// output.
pub fn render_document(
    manifest: &Manifest,
    config: &SiteConfig,
    generated_at: &str,
) -> Result<Markup, GenerateError> {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );
    let script = client_script(manifest, config)?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1,viewport-fit=cover";
                meta name="color-scheme" content="light dark";
                title { (config.title) }
                style { (PreEscaped(css)) }
            }
            body {
                header {
                    h1 { (config.title) }
                    p {
                        "Auto-generated on " (generated_at)
                        " • Cache version: " (manifest.version)
                    }
                }
                div.wrap {
                    nav.nav {
                        @for section in &manifest.sections {
                            a href={ "#" (section.id) } { (section.title) }
                        }
                    }
                    @for (si, section) in manifest.sections.iter().enumerate() {
                        (render_section(si, section))
                    }
                }
                footer {
                    small { (config.footer) }
                }
                script { (PreEscaped(script)) }
            }
        }
    })
}

/// Render one gallery section: player card plus sidebar entry list.
fn render_section(si: usize, section: &Section) -> Markup {
    html! {
        section.section id=(section.id) {
            div.card {
                h2 { (section.title) }
                @if let Some(desc) = &section.description {
                    div.description { (PreEscaped(markdown_to_html(desc))) }
                }
                div.player id={ "player-" (si) } {}
                div.controls {
                    button.secondary data-prev=(si) { "◀︎ Prev" }
                    button.secondary data-next=(si) { "Next ▶︎" }
                    button data-reload=(si) { "Reload Media" }
                }
                div.caption id={ "caption-" (si) } {}
                div.small id={ "meta-" (si) } {}
            }
            aside.card {
                h3 { (section.title) " — Items" }
                ul.list id={ "list-" (si) } {
                    @for (i, item) in section.items.iter().enumerate() {
                        li class=[(i == 0).then_some("active")]
                            data-select=(si) data-index=(i) {
                            span.small { "#" (i + 1) }
                            " "
                            @if item.label.is_empty() { (item.src) } @else { (item.label) }
                        }
                    }
                }
            }
        }
    }
}

/// Assemble the script block: build constants, the model as JSON, the cursor
/// array, then the embedded player.
fn client_script(manifest: &Manifest, config: &SiteConfig) -> Result<String, GenerateError> {
    let version = script_json(&manifest.version)?;
    let sections = script_json(&manifest.sections)?;
    Ok(format!(
        "const VERSION = {version};\n\
         const AUTO_ADVANCE_MS = {auto};\n\
         const EMBED_HEIGHT = {height};\n\
         const sections = {sections};\n\
         const state = sections.map(() => 0);\n\n{PLAYER_JS}",
        auto = config.slideshow.auto_advance_secs * 1000,
        height = config.slideshow.embed_height,
    ))
}

/// Serialize a value for embedding inside a `<script>` element. `<` is
/// escaped so no label or URL in the model can close the element early.
fn script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string_pretty(value)?.replace('<', "\\u003c"))
}

/// Render a section description from Markdown.
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}
