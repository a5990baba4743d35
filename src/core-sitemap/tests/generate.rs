//! End-to-end generation tests
//!
//! These drive `Sitemap::generate()` against a temporary directory and check:
//! - File naming (unnumbered single sitemap vs. numbered sitemaps + index)
//! - Exact document bytes, with a fixed clock
//! - Stale-file cleanup across reruns
//! - Order preservation across batches

use std::fs;
use std::path::Path;

use core_sitemap::{FixedClock, Sitemap, SitemapOptions};
use tempfile::TempDir;

const DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn clock() -> FixedClock {
    FixedClock::parse("2024-03-01T12:00:00+00:00").unwrap()
}

fn sitemap(dir: &TempDir, base_url: &str, limit: usize) -> Sitemap<FixedClock> {
    let options = SitemapOptions::builder()
        .base_url(base_url)
        .target(dir.path())
        .limit(limit)
        .build()
        .unwrap();
    Sitemap::with_clock(options, clock())
}

fn read(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).unwrap_or_else(|e| panic!("cannot read {name}: {e}"))
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_two_batches_with_index() {
    let dir = tempfile::tempdir().unwrap();
    let mut sitemap = sitemap(&dir, "https://example.com", 2);
    assert!(sitemap.add_location("/a"));
    assert!(sitemap.add("/b", Some("2020-01-01"), Some("daily"), Some(0.5)));
    assert!(sitemap.add("/c", None, None, Some(1.5)));

    let report = sitemap.generate().unwrap();
    assert_eq!(report.sitemaps.len(), 2);
    assert_eq!(file_names(dir.path()), vec!["sitemap.xml", "sitemap1.xml", "sitemap2.xml"]);

    assert_eq!(
        read(&dir, "sitemap1.xml"),
        format!(
            "{DECL}<urlset xmlns=\"{NS}\">\
             <url><loc>https://example.com/a</loc></url>\
             <url><loc>https://example.com/b</loc><lastmod>2020-01-01T00:00:00+00:00</lastmod>\
             <changefreq>daily</changefreq><priority>0.5</priority></url>\
             </urlset>\n"
        )
    );
    assert_eq!(
        read(&dir, "sitemap2.xml"),
        format!("{DECL}<urlset xmlns=\"{NS}\"><url><loc>https://example.com/c</loc></url></urlset>\n")
    );
    assert_eq!(
        read(&dir, "sitemap.xml"),
        format!(
            "{DECL}<sitemapindex xmlns=\"{NS}\">\
             <sitemap><loc>https://example.com/sitemap1.xml</loc><lastmod>2024-03-01T12:00:00+00:00</lastmod></sitemap>\
             <sitemap><loc>https://example.com/sitemap2.xml</loc><lastmod>2024-03-01T12:00:00+00:00</lastmod></sitemap>\
             </sitemapindex>\n"
        )
    );
}

#[test]
fn test_single_entry_writes_unnumbered_sitemap_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut sitemap = sitemap(&dir, "https://example.com/", 25000);
    sitemap.add_location("/only");

    let report = sitemap.generate().unwrap();
    assert!(report.index.is_none());
    assert!(report.references.is_empty());
    assert_eq!(file_names(dir.path()), vec!["sitemap.xml"]);
    assert_eq!(
        read(&dir, "sitemap.xml"),
        format!("{DECL}<urlset xmlns=\"{NS}\"><url><loc>https://example.com/only</loc></url></urlset>\n")
    );
}

#[test]
fn test_no_entries_writes_nothing_but_still_cleans() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sitemap.xml"), "stale").unwrap();
    fs::write(dir.path().join("sitemap3.xml"), "stale").unwrap();
    fs::write(dir.path().join("index.html"), "keep").unwrap();

    let mut sitemap = sitemap(&dir, "https://example.com", 10);
    assert!(!sitemap.add_location(""));

    let report = sitemap.generate().unwrap();
    assert_eq!(report.removed.len(), 2);
    assert!(report.sitemaps.is_empty());
    assert!(report.index.is_none());
    assert_eq!(file_names(dir.path()), vec!["index.html"]);
}

#[test]
fn test_rerun_with_fewer_entries_leaves_no_stale_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut sitemap = sitemap(&dir, "https://example.com", 2);
    for loc in ["/1", "/2", "/3", "/4", "/5"] {
        sitemap.add_location(loc);
    }
    sitemap.generate().unwrap();
    assert_eq!(
        file_names(dir.path()),
        vec!["sitemap.xml", "sitemap1.xml", "sitemap2.xml", "sitemap3.xml"]
    );

    sitemap.clear();
    sitemap.add_location("/1");
    let report = sitemap.generate().unwrap();
    assert_eq!(report.removed.len(), 4);
    assert_eq!(file_names(dir.path()), vec!["sitemap.xml"]);
    assert!(read(&dir, "sitemap.xml").contains("<urlset"));
}

#[test]
fn test_generate_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let mut sitemap = sitemap(&dir, "https://example.com", 2);
    for loc in ["/1", "/2", "/3"] {
        sitemap.add_location(loc);
    }

    let first = sitemap.generate().unwrap();
    let first_contents: Vec<String> = ["sitemap.xml", "sitemap1.xml", "sitemap2.xml"].iter().map(|n| read(&dir, n)).collect();
    let second = sitemap.generate().unwrap();
    let second_contents: Vec<String> = ["sitemap.xml", "sitemap1.xml", "sitemap2.xml"].iter().map(|n| read(&dir, n)).collect();

    assert_eq!(first.sitemaps, second.sitemaps);
    assert_eq!(first.references, second.references);
    assert_eq!(first_contents, second_contents);
    assert_eq!(second.removed.len(), 3);
}

#[test]
fn test_batches_preserve_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut sitemap = sitemap(&dir, "https://example.com", 3);
    let locations: Vec<String> = (0..10).map(|i| format!("/p{i}")).collect();
    for loc in &locations {
        sitemap.add_location(loc);
    }
    // Duplicates are kept.
    sitemap.add_location("/p0");

    let report = sitemap.generate().unwrap();
    assert_eq!(report.sitemaps.len(), 4);

    let mut seen = Vec::new();
    for path in &report.sitemaps {
        let xml = fs::read_to_string(path).unwrap();
        let locs: Vec<String> = xml
            .split("<loc>")
            .skip(1)
            .map(|rest| rest.split("</loc>").next().unwrap().to_string())
            .collect();
        assert!(locs.len() <= 3);
        seen.extend(locs);
    }

    let mut expected: Vec<String> = locations.iter().map(|l| format!("https://example.com{l}")).collect();
    expected.push("https://example.com/p0".to_string());
    assert_eq!(seen, expected);
}

#[test]
fn test_missing_target_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = SitemapOptions::builder()
        .target(dir.path().join("missing"))
        .build()
        .unwrap();
    let mut sitemap = Sitemap::with_clock(options, clock());
    sitemap.add_location("/a");

    assert!(sitemap.generate().is_err());
}
