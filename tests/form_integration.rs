//! End-to-end behavior of the submission form with a scripted picker and a
//! notifier that records instead of opening dialogs.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use event_dashboard::config::{Configuration, PickerOptions};
use event_dashboard::error::ValidationError;
use event_dashboard::events::{Notice, NoticeLevel};
use event_dashboard::form::EventForm;
use event_dashboard::tasks::notifier::Notifier;
use event_dashboard::tasks::picker::ImagePicker;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

/// Plays back one canned answer per click; `None` is a cancel.
#[derive(Default)]
struct ScriptedPicker {
    answers: VecDeque<Option<Vec<PathBuf>>>,
}

impl ImagePicker for ScriptedPicker {
    fn pick_images(&mut self, _opts: &PickerOptions) -> Option<Vec<PathBuf>> {
        self.answers.pop_front().flatten()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    seen: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.seen.push(notice.clone());
    }
}

fn form_with(answers: Vec<Option<Vec<PathBuf>>>) -> EventForm<ScriptedPicker, RecordingNotifier> {
    let cfg = Configuration {
        loader_max_concurrent_decodes: 3,
        ..Configuration::default()
    };
    let picker = ScriptedPicker {
        answers: answers.into(),
    };
    EventForm::new(cfg, picker, RecordingNotifier::default())
}

fn png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(64, 48, Rgba([10, 200, 30, 255]))
        .save(&path)
        .unwrap();
    path
}

fn jpg(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(640, 480, Rgb([30, 30, 220])).save(&path).unwrap();
    path
}

fn gif(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(20, 20, Rgba([250, 250, 0, 255]))
        .save(&path)
        .unwrap();
    path
}

fn corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\xFF\xD8\xFF not really a jpeg").unwrap();
    path
}

fn sources(form: &EventForm<ScriptedPicker, RecordingNotifier>) -> Vec<PathBuf> {
    form.session()
        .uploaded()
        .iter()
        .map(|t| t.source.clone())
        .collect()
}

fn levels(notifier: &RecordingNotifier) -> Vec<NoticeLevel> {
    notifier.seen.iter().map(|n| n.level).collect()
}

fn tmp() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn batch_keeps_selection_order() {
    let dir = tmp();
    let batch = vec![
        png(dir.path(), "a.png"),
        jpg(dir.path(), "b.jpg"),
        gif(dir.path(), "c.gif"),
    ];
    let mut form = form_with(vec![Some(batch.clone())]);

    let report = form.open_image_picker();
    assert!(!report.cancelled);
    assert_eq!(report.added, batch);
    assert!(report.failed.is_empty());
    assert_eq!(sources(&form), batch);
    assert!(form.session().has_uploaded());
    assert!(!form.session().shows_placeholder());
    for thumb in form.session().uploaded() {
        assert_eq!((thumb.width, thumb.height), (120, 80));
    }
    assert!(form.notifier().seen.is_empty());
}

#[test]
fn corrupt_file_is_reported_and_the_rest_still_load() {
    let dir = tmp();
    let valid = png(dir.path(), "valid.png");
    let bad = corrupt(dir.path(), "corrupt.jpg");
    let valid2 = png(dir.path(), "valid2.png");
    let mut form = form_with(vec![Some(vec![valid.clone(), bad.clone(), valid2.clone()])]);

    let report = form.open_image_picker();

    assert_eq!(sources(&form), vec![valid, valid2]);
    assert!(form.session().has_uploaded());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file_name, "corrupt.jpg");
    assert_eq!(report.failed[0].path, bad);

    let seen = &form.notifier().seen;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].level, NoticeLevel::Error);
    assert_eq!(seen[0].body, "Error loading image: corrupt.jpg");
}

#[test]
fn batch_of_only_bad_files_leaves_placeholder() {
    let dir = tmp();
    let mut form = form_with(vec![Some(vec![corrupt(dir.path(), "x.png")])]);
    form.open_image_picker();
    assert!(!form.session().has_uploaded());
    assert!(form.session().shows_placeholder());
    assert_eq!(levels(form.notifier()), vec![NoticeLevel::Error]);
}

#[test]
fn cancel_changes_nothing() {
    let dir = tmp();
    let first = png(dir.path(), "first.png");
    let mut form = form_with(vec![Some(vec![first.clone()]), None]);
    form.open_image_picker();
    form.news_text_mut().push_str("draft");

    let report = form.open_image_picker();

    assert!(report.cancelled);
    assert!(report.added.is_empty());
    assert_eq!(sources(&form), vec![first]);
    assert!(form.session().has_uploaded());
    assert_eq!(form.session().news_text(), "draft");
    assert!(form.notifier().seen.is_empty());
}

#[test]
fn later_batches_append_after_earlier_ones() {
    let dir = tmp();
    let a = png(dir.path(), "a.png");
    let b = png(dir.path(), "b.png");
    let mut form = form_with(vec![Some(vec![a.clone()]), Some(vec![b.clone()])]);
    form.open_image_picker();
    form.open_image_picker();
    assert_eq!(sources(&form), vec![a, b]);
}

#[test]
fn submit_without_images_is_rejected() {
    let mut form = form_with(vec![]);
    form.news_text_mut().push_str("Keynote went well");

    assert_eq!(form.submit(), Err(ValidationError));
    assert_eq!(form.session().news_text(), "Keynote went well");
    let seen = &form.notifier().seen;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].title, "Error");
    assert_eq!(seen[0].body, "Error: Upload photos and add news!");
}

#[test]
fn submit_with_blank_news_is_rejected() {
    let dir = tmp();
    let mut form = form_with(vec![Some(vec![png(dir.path(), "a.png")])]);
    form.open_image_picker();
    form.news_text_mut().push_str("  \n\t ");

    assert_eq!(form.submit(), Err(ValidationError));
    assert_eq!(form.session().uploaded().len(), 1);
    assert!(form.session().has_uploaded());
    assert_eq!(form.session().news_text(), "  \n\t ");
}

#[test]
fn successful_submit_resets_and_second_submit_fails() {
    let dir = tmp();
    let a = png(dir.path(), "a.png");
    let b = jpg(dir.path(), "b.jpg");
    let mut form = form_with(vec![Some(vec![a.clone(), b.clone()])]);
    form.open_image_picker();
    form.news_text_mut().push_str("Demo day recap");
    let generation = form.session().generation();

    let submission = form.submit().unwrap();
    assert_eq!(submission.images, vec![a, b]);
    assert_eq!(submission.news, "Demo day recap");

    assert!(form.session().uploaded().is_empty());
    assert!(!form.session().has_uploaded());
    assert!(form.session().shows_placeholder());
    assert_eq!(form.session().news_text(), "");
    assert_eq!(form.session().generation(), generation + 1);

    assert_eq!(form.submit(), Err(ValidationError));
    assert_eq!(
        levels(form.notifier()),
        vec![NoticeLevel::Info, NoticeLevel::Error]
    );
    assert_eq!(form.notifier().seen[0].body, "Photos and News have been submitted!");
    assert_eq!(form.notifier().seen[0].title, "Success");
}

#[test]
fn non_image_paths_from_the_dialog_are_ignored() {
    let dir = tmp();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "hello").unwrap();
    let a = png(dir.path(), "a.png");
    let mut form = form_with(vec![Some(vec![notes, a.clone()])]);

    let report = form.open_image_picker();
    assert_eq!(report.added, vec![a]);
    assert!(report.failed.is_empty());
    assert!(form.notifier().seen.is_empty());
}
