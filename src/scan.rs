//! Filesystem scanning and manifest assembly.
//!
//! One pass over the `photos/` tree produces the [`Manifest`] the emitter
//! consumes. Each immediate subdirectory of `photos/` is a *section*; the
//! files inside it are classified by extension into images and videos, and an
//! optional `links.txt` contributes external embeds.
//!
//! ## Directory Structure
//!
//! ```text
//! photos/
//! ├── flag/                    # Section (directory name → id + title)
//! │   ├── 1.jpg
//! │   ├── 2.jpg
//! │   └── description.txt      # Section description (optional)
//! ├── champions/
//! │   ├── clip.mp4
//! │   ├── clip.jpg             # Poster for clip.mp4 (and an entry itself)
//! │   └── links.txt            # One external video URL per line
//! └── 10_finale/
//!     └── final-bow.webm
//! ```
//!
//! ## Ordering
//!
//! Sections and the local files within them are natural-sorted
//! ([`order::natural_cmp`]); external links keep their `links.txt` order and
//! always follow the local files.
//!
//! ## Recovery
//!
//! A missing `photos/` directory and an unreadable section are both
//! recovered: the scan continues and the problem is recorded in
//! [`Manifest::warnings`]. Only an unreadable `photos/` directory itself
//! aborts the scan.

use crate::{embed, naming, order};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions classified as images (case-insensitive).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Extensions classified as videos (case-insensitive).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm"];

/// Poster candidates for a video, tried in this order. GIF classifies as an
/// image entry but is not a poster candidate.
const POSTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Per-section file holding one external video URL per line.
pub const LINKS_FILE_NAME: &str = "links.txt";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read photos directory {path}: {source}")]
    PhotosUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One renderable unit: a local image, a local video, or an external embed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,
    /// URL relative to the output file; local files carry `?v=<version>`.
    pub src: String,
    /// Poster image URL, videos only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Caption: extension-stripped basename for files, the raw URL for embeds.
    pub label: String,
    /// Provider-canonical embed URL, external embeds only.
    #[serde(rename = "embedUrl", skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Image,
    Video,
    ExternalEmbed,
}

/// One thematic group of entries, from one directory under `photos/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section {
    /// Fragment-identifier slug derived from the directory name.
    pub id: String,
    /// Humanized directory name.
    pub title: String,
    /// Original directory name under `photos/` (diagnostics only, not part
    /// of the embedded model).
    #[serde(skip)]
    pub source_dir: String,
    /// Description from `description.md` or `description.txt` (raw text,
    /// rendered as Markdown by the emitter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered, non-empty entry list.
    pub items: Vec<Entry>,
}

/// Everything the emitter needs: the version token, the ordered sections,
/// and any problems recovered along the way.
#[derive(Debug)]
pub struct Manifest {
    pub version: String,
    pub sections: Vec<Section>,
    pub warnings: Vec<String>,
}

/// Scan the photos directory into a [`Manifest`].
///
/// Sections with no classifiable entries are dropped. A missing photos
/// directory yields an empty manifest with a warning; an unreadable one is
/// the only hard error.
pub fn scan(photos_dir: &Path, version: &str) -> Result<Manifest, ScanError> {
    let mut manifest = Manifest {
        version: version.to_string(),
        sections: Vec::new(),
        warnings: Vec::new(),
    };

    if !photos_dir.exists() {
        manifest.warnings.push(format!(
            "photos directory not found at {}",
            photos_dir.display()
        ));
        return Ok(manifest);
    }

    for dir in list_section_dirs(photos_dir)? {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match build_section(&dir, &dir_name, version, &mut manifest.warnings) {
            Ok(Some(section)) => manifest.sections.push(section),
            Ok(None) => {}
            Err(err) => manifest
                .warnings
                .push(format!("skipping unreadable section {dir_name}: {err}")),
        }
    }

    if manifest.sections.is_empty() {
        manifest
            .warnings
            .push("No media found. Put files under photos/<section>/ and rerun.".to_string());
    }

    Ok(manifest)
}

/// List the immediate subdirectories of the photos root in natural order.
/// Hidden names are skipped; symlinks to directories are followed.
fn list_section_dirs(photos_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read = fs::read_dir(photos_dir).map_err(|source| ScanError::PhotosUnreadable {
        path: photos_dir.to_path_buf(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = read
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            let name = p.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            !name.starts_with('.') && p.is_dir()
        })
        .collect();

    dirs.sort_by(|a, b| {
        order::natural_cmp(
            &a.file_name().unwrap_or_default().to_string_lossy(),
            &b.file_name().unwrap_or_default().to_string_lossy(),
        )
    });
    Ok(dirs)
}

/// Build one section, or `None` when it has no classifiable entries.
fn build_section(
    dir: &Path,
    dir_name: &str,
    version: &str,
    warnings: &mut Vec<String>,
) -> std::io::Result<Option<Section>> {
    let files = list_files(dir)?;
    let mut items = build_file_entries(dir_name, &files, version);
    items.extend(build_link_entries(dir, dir_name, warnings));

    if items.is_empty() {
        return Ok(None);
    }

    Ok(Some(Section {
        id: naming::section_id(dir_name),
        title: naming::section_title(dir_name),
        source_dir: dir_name.to_string(),
        description: read_description(dir),
        items,
    }))
}

/// List the regular files of a section directory in natural order, hidden
/// names skipped.
fn list_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut files: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();

    files.sort_by(|a, b| order::natural_cmp(a, b));
    Ok(files)
}

/// Classify the section's files into image and video entries.
fn build_file_entries(dir_name: &str, files: &[String], version: &str) -> Vec<Entry> {
    files
        .iter()
        .filter_map(|file| {
            let stem = file_stem(file);
            let src = format!("{}?v={}", web_src(dir_name, file), version);

            if has_extension_in(file, IMAGE_EXTENSIONS) {
                Some(Entry {
                    kind: EntryKind::Image,
                    src,
                    poster: None,
                    label: stem.to_string(),
                    embed_url: None,
                })
            } else if has_extension_in(file, VIDEO_EXTENSIONS) {
                Some(Entry {
                    kind: EntryKind::Video,
                    src,
                    poster: find_poster(dir_name, files, stem, version),
                    label: stem.to_string(),
                    embed_url: None,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Find a poster image for a video: a sibling sharing the video's basename,
/// first extension hit in [`POSTER_EXTENSIONS`] order wins. The extension
/// matches case-insensitively; the basename must match exactly.
fn find_poster(dir_name: &str, files: &[String], base: &str, version: &str) -> Option<String> {
    POSTER_EXTENSIONS.iter().find_map(|ext| {
        files
            .iter()
            .find(|f| {
                file_stem(f) == base
                    && extension_of(f).is_some_and(|e| e.eq_ignore_ascii_case(ext))
            })
            .map(|f| format!("{}?v={}", web_src(dir_name, f), version))
    })
}

/// Read `links.txt` into external-embed entries, in input order.
fn build_link_entries(dir: &Path, dir_name: &str, warnings: &mut Vec<String>) -> Vec<Entry> {
    let links_path = dir.join(LINKS_FILE_NAME);
    if !links_path.is_file() {
        return Vec::new();
    }

    let content = match fs::read_to_string(&links_path) {
        Ok(content) => content,
        Err(err) => {
            warnings.push(format!(
                "cannot read {} in section {dir_name}: {err}",
                LINKS_FILE_NAME
            ));
            return Vec::new();
        }
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Entry {
            kind: EntryKind::ExternalEmbed,
            src: line.to_string(),
            poster: None,
            label: line.to_string(),
            embed_url: Some(embed::canonicalize(line)),
        })
        .collect()
}

/// Resolve the section description: `description.md` preferred over
/// `description.txt`, first non-empty wins.
fn read_description(dir: &Path) -> Option<String> {
    ["description.md", "description.txt"]
        .iter()
        .filter_map(|name| fs::read_to_string(dir.join(name)).ok())
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}

/// URL of a section file relative to the output document. Built from name
/// components, so separators are forward slashes on every host OS.
fn web_src(dir_name: &str, file: &str) -> String {
    format!("{}/{}/{}", crate::paths::PHOTOS_DIR_NAME, dir_name, file)
}

fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

fn extension_of(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => Some(ext),
        _ => None,
    }
}

fn has_extension_in(name: &str, extensions: &[&str]) -> bool {
    extension_of(name).is_some_and(|ext| {
        extensions.iter().any(|e| ext.eq_ignore_ascii_case(e))
    })
}
