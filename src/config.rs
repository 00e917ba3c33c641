use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbnailFit {
    /// Fill the thumbnail box exactly, ignoring the source aspect ratio.
    #[default]
    Stretch,
    /// Scale to fit inside the box and pad the rest with transparency.
    Contain,
    /// Scale to fill the box and crop the overflow around the center.
    Cover,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ThumbnailOptions {
    pub width: u32,
    pub height: u32,
    pub fit: ThumbnailFit,
    /// Rotate/flip according to the EXIF orientation tag before scaling.
    pub apply_exif_orientation: bool,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            width: 120,
            height: 80,
            fit: ThumbnailFit::default(),
            apply_exif_orientation: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PickerOptions {
    /// Dialog window title.
    pub title: String,
    /// Label of the single extension filter offered by the dialog.
    pub filter_name: String,
    /// Accepted file extensions, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            title: "Select Image(s)".to_string(),
            filter_name: "Image Files".to_string(),
            extensions: ["jpg", "jpeg", "png", "gif"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    pub window_title: String,
    /// Initial inner size of the window in logical points.
    pub window_size: [f32; 2],
    /// Shown in the heading as "Event Name: <event-name>".
    pub event_name: String,
    pub thumbnail: ThumbnailOptions,
    pub picker: PickerOptions,
    /// Maximum number of images decoded at once when a batch is picked.
    pub loader_max_concurrent_decodes: usize,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.thumbnail.width > 0 && self.thumbnail.height > 0,
            "thumbnail.width and thumbnail.height must be greater than zero"
        );
        ensure!(
            self.window_size.iter().all(|v| v.is_finite() && *v > 0.0),
            "window-size must contain two positive values"
        );
        ensure!(
            !self.picker.extensions.is_empty(),
            "picker.extensions must list at least one extension"
        );
        ensure!(
            self.picker.extensions.iter().all(|e| !e.trim().is_empty()),
            "picker.extensions must not contain blank entries"
        );
        ensure!(
            self.loader_max_concurrent_decodes > 0,
            "loader-max-concurrent-decodes must be greater than zero"
        );
        Ok(self)
    }

    pub fn heading(&self) -> String {
        format!("Event Name: {}", self.event_name)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            window_title: "Event Dashboard".to_string(),
            window_size: [600.0, 500.0],
            event_name: "Innovating the Future".to_string(),
            thumbnail: ThumbnailOptions::default(),
            picker: PickerOptions::default(),
            loader_max_concurrent_decodes: 4,
        }
    }
}
