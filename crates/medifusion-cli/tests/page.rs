use std::sync::Arc;

use medifusion_cli::page::PageArea;
use medifusion_export::area::ResultsArea;
use medifusion_export::presenter::error_view;
use medifusion_export::preview::PreviewPane;
use medifusion_export::render::ResultRenderer;

#[test]
fn rewrites_page_without_leaving_staging_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results.html");
    let renderer = Arc::new(ResultRenderer::new().unwrap());
    let area = PageArea::new(&out, PreviewPane::default(), Arc::clone(&renderer));

    area.replace(renderer.present(error_view("first")).unwrap()).unwrap();
    area.replace(renderer.present(error_view("second")).unwrap()).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("second"));
    assert!(!html.contains("first"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn failed_write_removes_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the page should go makes the final rename fail.
    let out = dir.path().join("results.html");
    std::fs::create_dir(&out).unwrap();

    let area = PageArea::new(
        &out,
        PreviewPane::default(),
        Arc::new(ResultRenderer::new().unwrap()),
    );
    assert!(area.write("<p>x</p>").is_err());

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("results.html")]);
}

#[test]
fn page_area_shares_the_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = Arc::new(ResultRenderer::new().unwrap());
    let area = PageArea::new(
        dir.path().join("page.html"),
        PreviewPane::default(),
        Arc::clone(&renderer),
    );

    assert_eq!(Arc::strong_count(&renderer), 2);
    drop(area);
    assert_eq!(Arc::strong_count(&renderer), 1);
}
