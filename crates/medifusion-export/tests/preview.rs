use medifusion_core::models::payload::SelectedFile;
use medifusion_export::preview::preview_selection;

fn write(dir: &std::path::Path, name: &str, bytes: &[u8]) -> SelectedFile {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    SelectedFile::from_path(path)
}

#[tokio::test]
async fn only_images_are_previewed() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![
        write(dir.path(), "scan_a.png", b"\x89PNG fake"),
        write(dir.path(), "notes.txt", b"not an image"),
        write(dir.path(), "scan_b.jpg", b"\xff\xd8 fake"),
        write(dir.path(), "volume.dcm.bin", b"raw"),
    ];

    let pane = preview_selection(&files).await;
    assert_eq!(pane.len(), 2);

    let mut names: Vec<&str> = pane.previews().iter().map(|p| p.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["scan_a.png", "scan_b.jpg"]);
}

#[tokio::test]
async fn each_image_appears_exactly_once_as_data_url() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![write(dir.path(), "scan.png", b"abc")];

    let pane = preview_selection(&files).await;
    assert_eq!(pane.len(), 1);
    assert_eq!(pane.previews()[0].data_url, "data:image/png;base64,YWJj");
}

#[tokio::test]
async fn unreadable_image_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let missing = SelectedFile::from_path(dir.path().join("gone.png"));
    let present = write(dir.path(), "here.png", b"x");

    let pane = preview_selection(&[missing, present]).await;
    assert_eq!(pane.len(), 1);
    assert_eq!(pane.previews()[0].name, "here.png");
}

#[tokio::test]
async fn new_selection_replaces_previous_previews() {
    let dir = tempfile::tempdir().unwrap();
    let first = preview_selection(&[write(dir.path(), "one.png", b"1")]).await;
    assert_eq!(first.len(), 1);

    let second = preview_selection(&[write(dir.path(), "two.txt", b"2")]).await;
    assert!(second.is_empty());
}
