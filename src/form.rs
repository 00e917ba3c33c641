use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::config::Configuration;
use crate::error::ValidationError;
use crate::events::{Notice, PickReport, Submission};
use crate::processing::thumbnail::Thumbnail;
use crate::session::SessionState;
use crate::tasks::loader::decode_batch;
use crate::tasks::notifier::Notifier;
use crate::tasks::picker::{ImagePicker, pick_filtered};

/// Controller for the event submission window.
///
/// Owns the session and mediates the three user actions: clicking the upload
/// card, typing news, and pressing Submit.
pub struct EventForm<P, N> {
    cfg: Configuration,
    picker: P,
    notifier: N,
    session: SessionState<Thumbnail>,
}

impl<P: ImagePicker, N: Notifier> EventForm<P, N> {
    pub fn new(cfg: Configuration, picker: P, notifier: N) -> Self {
        Self {
            cfg,
            picker,
            notifier,
            session: SessionState::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.cfg
    }

    pub fn session(&self) -> &SessionState<Thumbnail> {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn news_text_mut(&mut self) -> &mut String {
        self.session.news_text_mut()
    }

    /// Click on the upload card: pick files, then decode and append them.
    pub fn open_image_picker(&mut self) -> PickReport {
        match pick_filtered(&mut self.picker, &self.cfg.picker) {
            Some(paths) => self.add_images(&paths),
            None => PickReport {
                cancelled: true,
                ..PickReport::default()
            },
        }
    }

    /// Decodes `paths` and appends a thumbnail for each one that loads.
    ///
    /// A file that fails is reported on its own and the rest of the batch still loads.
    #[instrument(skip_all, fields(count = paths.len()))]
    pub fn add_images(&mut self, paths: &[PathBuf]) -> PickReport {
        let mut report = PickReport::default();
        let results = decode_batch(
            paths,
            &self.cfg.thumbnail,
            self.cfg.loader_max_concurrent_decodes,
        );
        for result in results {
            match result {
                Ok(thumb) => {
                    debug!(path = %thumb.source.display(), "thumbnail added");
                    report.added.push(thumb.source.clone());
                    if self.session.push_thumbnail(thumb) {
                        debug!("placeholder cleared");
                    }
                }
                Err(err) => {
                    warn!(
                        path = %err.path.display(),
                        error = %format!("{:#}", err.source),
                        "failed to load image"
                    );
                    self.notifier.notify(&Notice::load_failed(&err));
                    report.failed.push(err);
                }
            }
        }
        info!(
            added = report.added.len(),
            failed = report.failed.len(),
            total = self.session.uploaded().len(),
            "images loaded"
        );
        report
    }

    /// Validates the session, notifies the user, and resets on success.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        if let Err(err) = self.session.validate() {
            info!(
                has_uploaded = self.session.has_uploaded(),
                news_blank = self.session.news_text().trim().is_empty(),
                "submit rejected"
            );
            self.notifier.notify(&Notice::rejected(&err));
            return Err(err);
        }

        // the success dialog is acknowledged before the form clears
        self.notifier.notify(&Notice::submitted());
        let (images, news) = self.session.submit()?;
        info!(
            images = images.len(),
            news_chars = news.chars().count(),
            "event submitted"
        );
        Ok(Submission {
            images: images.into_iter().map(|t| t.source).collect(),
            news,
        })
    }
}
