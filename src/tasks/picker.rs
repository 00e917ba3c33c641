use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::PickerOptions;

/// Source of user-selected image paths.
pub trait ImagePicker {
    /// Returns the chosen paths in selection order, or `None` if the user cancelled.
    fn pick_images(&mut self, opts: &PickerOptions) -> Option<Vec<PathBuf>>;
}

/// Native multi-select file dialog restricted to the configured image extensions.
#[derive(Debug, Default)]
pub struct FileDialogPicker;

impl ImagePicker for FileDialogPicker {
    fn pick_images(&mut self, opts: &PickerOptions) -> Option<Vec<PathBuf>> {
        // Only the image filter is registered, so no "all files" choice is offered.
        rfd::FileDialog::new()
            .set_title(opts.title.as_str())
            .add_filter(opts.filter_name.as_str(), opts.extensions.as_slice())
            .pick_files()
    }
}

/// Picks through `picker`, then drops anything that does not carry an accepted extension.
///
/// A selection that ends up empty is reported the same as a cancel.
pub fn pick_filtered<P: ImagePicker + ?Sized>(
    picker: &mut P,
    opts: &PickerOptions,
) -> Option<Vec<PathBuf>> {
    let Some(picked) = picker.pick_images(opts) else {
        info!("image picker cancelled");
        return None;
    };
    let total = picked.len();
    let kept: Vec<PathBuf> = picked
        .into_iter()
        .filter(|p| {
            let ok = is_image(p, &opts.extensions);
            if !ok {
                debug!(path = %p.display(), "picker: ignoring non-image path");
            }
            ok
        })
        .collect();
    info!(picked = total, kept = kept.len(), "image picker returned");
    if kept.is_empty() { None } else { Some(kept) }
}

#[inline]
pub fn is_image(p: &Path, extensions: &[String]) -> bool {
    matches!(
        p.extension()
            .and_then(OsStr::to_str)
            .map(|s| s.to_ascii_lowercase()),
        Some(ref e) if extensions.iter().any(|x| x.eq_ignore_ascii_case(e))
    )
}
