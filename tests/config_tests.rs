use event_dashboard::config::{Configuration, ThumbnailFit};

#[test]
fn empty_document_uses_defaults() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    assert_eq!(cfg.window_title, "Event Dashboard");
    assert_eq!(cfg.window_size, [600.0, 500.0]);
    assert_eq!(cfg.heading(), "Event Name: Innovating the Future");
    assert_eq!((cfg.thumbnail.width, cfg.thumbnail.height), (120, 80));
    assert_eq!(cfg.thumbnail.fit, ThumbnailFit::Stretch);
    assert!(cfg.thumbnail.apply_exif_orientation);
    assert_eq!(cfg.picker.extensions, vec!["jpg", "jpeg", "png", "gif"]);
    assert_eq!(cfg.picker.title, "Select Image(s)");
    assert_eq!(cfg.loader_max_concurrent_decodes, 4);
    assert!(cfg.validated().is_ok());
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
event-name: "Rust Meetup"
window-size: [800, 640]
loader-max-concurrent-decodes: 2
thumbnail:
  width: 96
  height: 96
  fit: contain
  apply-exif-orientation: false
picker:
  filter-name: "Photos"
  extensions: [png]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.heading(), "Event Name: Rust Meetup");
    assert_eq!(cfg.window_size, [800.0, 640.0]);
    assert_eq!(cfg.loader_max_concurrent_decodes, 2);
    assert_eq!((cfg.thumbnail.width, cfg.thumbnail.height), (96, 96));
    assert_eq!(cfg.thumbnail.fit, ThumbnailFit::Contain);
    assert!(!cfg.thumbnail.apply_exif_orientation);
    assert_eq!(cfg.picker.filter_name, "Photos");
    assert_eq!(cfg.picker.extensions, vec!["png"]);
    // untouched nested keys keep their defaults
    assert_eq!(cfg.picker.title, "Select Image(s)");
}

#[test]
fn unknown_fit_is_rejected() {
    let yaml = "thumbnail:\n  fit: squash\n";
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}

#[test]
fn validation_rejects_bad_values() {
    let zero_thumb: Configuration = serde_yaml::from_str("thumbnail:\n  width: 0\n").unwrap();
    assert!(zero_thumb.validated().is_err());

    let no_exts: Configuration = serde_yaml::from_str("picker:\n  extensions: []\n").unwrap();
    assert!(no_exts.validated().is_err());

    let blank_ext: Configuration =
        serde_yaml::from_str("picker:\n  extensions: [png, \" \"]\n").unwrap();
    assert!(blank_ext.validated().is_err());

    let no_workers: Configuration =
        serde_yaml::from_str("loader-max-concurrent-decodes: 0\n").unwrap();
    assert!(no_workers.validated().is_err());

    let bad_window: Configuration = serde_yaml::from_str("window-size: [0, 500]\n").unwrap();
    assert!(bad_window.validated().is_err());
}

#[test]
fn from_yaml_file_reads_and_reports_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.yaml");
    std::fs::write(&path, "event-name: Demo Day\n").unwrap();
    let cfg = Configuration::from_yaml_file(&path).unwrap();
    assert_eq!(cfg.event_name, "Demo Day");

    let missing = dir.path().join("nope.yaml");
    assert!(Configuration::from_yaml_file(&missing).is_err());
}
