//! End-to-end pipeline tests: build a photos tree on disk, run scan +
//! generate, and inspect the document a browser would load.

use showdeck::config::SiteConfig;
use showdeck::scan::{EntryKind, scan};
use showdeck::{generate, paths};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VERSION: &str = "2026-08-07";
const STAMP: &str = "2026-08-07 12:00:00";

fn section_dir(root: &Path, name: &str) -> PathBuf {
    let dir = root.join("photos").join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Scan a project root and render the document it would publish.
fn build_to_string(root: &Path) -> String {
    let paths = paths::ProjectPaths::resolve(root).unwrap();
    let manifest = scan(&paths.photos_dir, VERSION).unwrap();
    let out = paths.output_file.clone();
    generate::generate(&manifest, &SiteConfig::default(), &out, STAMP).unwrap();
    fs::read_to_string(&out).unwrap()
}

#[test]
fn empty_photos_tree_yields_skeleton_and_warning() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("photos")).unwrap();

    let paths = paths::ProjectPaths::resolve(tmp.path()).unwrap();
    let manifest = scan(&paths.photos_dir, VERSION).unwrap();
    assert!(manifest.warnings.iter().any(|w| w.contains("No media found")));

    let doc = build_to_string(tmp.path());
    assert!(doc.contains("<header>"));
    assert!(doc.contains(r#"<nav class="nav"></nav>"#));
    assert!(!doc.contains("<section"));
}

#[test]
fn image_section_flows_into_model_and_document() {
    let tmp = TempDir::new().unwrap();
    let dir = section_dir(tmp.path(), "a");
    fs::write(dir.join("1.jpg"), "img").unwrap();
    fs::write(dir.join("2.jpg"), "img").unwrap();

    let doc = build_to_string(tmp.path());
    assert!(doc.contains(r#"<section class="section" id="a">"#));
    assert!(doc.contains("<h2>A</h2>"));
    assert!(doc.contains("photos/a/1.jpg?v=2026-08-07"));
    assert!(doc.contains("photos/a/2.jpg?v=2026-08-07"));
}

#[test]
fn video_with_poster_flows_into_model() {
    let tmp = TempDir::new().unwrap();
    let dir = section_dir(tmp.path(), "v");
    fs::write(dir.join("clip.mp4"), "vid").unwrap();
    fs::write(dir.join("clip.png"), "img").unwrap();

    let paths = paths::ProjectPaths::resolve(tmp.path()).unwrap();
    let manifest = scan(&paths.photos_dir, VERSION).unwrap();

    let items = &manifest.sections[0].items;
    assert_eq!(items.len(), 2);
    let video = items.iter().find(|e| e.kind == EntryKind::Video).unwrap();
    assert_eq!(
        video.poster.as_deref(),
        Some("photos/v/clip.png?v=2026-08-07")
    );
}

#[test]
fn local_files_precede_links_in_document_model() {
    let tmp = TempDir::new().unwrap();
    let dir = section_dir(tmp.path(), "x");
    fs::write(dir.join("p.jpg"), "img").unwrap();
    fs::write(dir.join("links.txt"), "https://youtu.be/XYZ\n").unwrap();

    let doc = build_to_string(tmp.path());
    let img_pos = doc.find("photos/x/p.jpg").unwrap();
    let embed_pos = doc.find("https://www.youtube.com/embed/XYZ").unwrap();
    assert!(img_pos < embed_pos);
}

#[test]
fn nav_follows_natural_section_order() {
    let tmp = TempDir::new().unwrap();
    for name in ["10_finale", "2_intro", "1_open"] {
        let dir = section_dir(tmp.path(), name);
        fs::write(dir.join("x.jpg"), "img").unwrap();
    }

    let doc = build_to_string(tmp.path());
    let open = doc.find(r##"href="#1_open""##).unwrap();
    let intro = doc.find(r##"href="#2_intro""##).unwrap();
    let finale = doc.find(r##"href="#10_finale""##).unwrap();
    assert!(open < intro && intro < finale);
}

#[test]
fn every_local_src_carries_the_version_token() {
    let tmp = TempDir::new().unwrap();
    let dir = section_dir(tmp.path(), "mix");
    fs::write(dir.join("a.jpg"), "img").unwrap();
    fs::write(dir.join("b.mp4"), "vid").unwrap();
    fs::write(dir.join("b.jpg"), "img").unwrap();

    let paths = paths::ProjectPaths::resolve(tmp.path()).unwrap();
    let manifest = scan(&paths.photos_dir, VERSION).unwrap();

    for entry in &manifest.sections[0].items {
        assert!(entry.src.ends_with("?v=2026-08-07"), "src: {}", entry.src);
        if let Some(poster) = &entry.poster {
            assert!(poster.ends_with("?v=2026-08-07"), "poster: {poster}");
        }
    }
}

#[test]
fn regeneration_replaces_the_document_whole() {
    let tmp = TempDir::new().unwrap();
    let dir = section_dir(tmp.path(), "a");
    fs::write(dir.join("old.jpg"), "img").unwrap();

    let first = build_to_string(tmp.path());
    assert!(first.contains("photos/a/old.jpg"));

    fs::remove_file(dir.join("old.jpg")).unwrap();
    fs::write(dir.join("new.jpg"), "img").unwrap();

    let second = build_to_string(tmp.path());
    assert!(second.contains("photos/a/new.jpg"));
    assert!(!second.contains("photos/a/old.jpg"));
}
