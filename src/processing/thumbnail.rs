use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use fast_image_resize as fir;
use image::{ImageReader, RgbaImage, imageops};
use tracing::debug;

use crate::config::{ThumbnailFit, ThumbnailOptions};
use crate::error::DecodeError;
use crate::processing::layout::{center_offset, cover_crop, fit_within};

/// Fixed-size RGBA8 preview of a picked image.
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Unpremultiplied RGBA8, row-major, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Thumbnail {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("source", &self.source)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Decodes `path` and scales it to the configured thumbnail box.
pub fn decode_thumbnail(path: &Path, opts: &ThumbnailOptions) -> Result<Thumbnail, DecodeError> {
    render(path, opts).map_err(|err| DecodeError::new(path, err))
}

fn render(path: &Path, opts: &ThumbnailOptions) -> Result<Thumbnail> {
    let rgba = decode_rgba8(path, opts.apply_exif_orientation)?;
    let scaled = scale_into_box(&rgba, opts.width, opts.height, opts.fit)?;
    debug!(
        path = %path.display(),
        source_w = rgba.width(),
        source_h = rgba.height(),
        "thumbnail rendered"
    );
    Ok(Thumbnail {
        source: path.to_path_buf(),
        width: scaled.width(),
        height: scaled.height(),
        pixels: scaled.into_raw(),
    })
}

fn decode_rgba8(path: &Path, apply_exif: bool) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .with_guessed_format()
        .context("failed to sniff image format")?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let img = img.to_rgba8();

    if !apply_exif {
        return Ok(img);
    }
    let orientation = read_orientation(path).unwrap_or(1);
    Ok(apply_orientation(img, orientation))
}

/// Maps an EXIF orientation tag onto the upright image. Unknown values pass through.
fn apply_orientation(img: RgbaImage, orientation: u16) -> RgbaImage {
    match orientation {
        2 => imageops::flip_horizontal(&img),
        3 => imageops::rotate180(&img),
        4 => imageops::flip_vertical(&img),
        5 => imageops::flip_horizontal(&imageops::rotate90(&img)),
        6 => imageops::rotate90(&img),
        7 => imageops::flip_horizontal(&imageops::rotate270(&img)),
        8 => imageops::rotate270(&img),
        _ => img,
    }
}

fn read_orientation(path: &Path) -> Option<u16> {
    let file = File::open(path).ok()?;
    let mut buf = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut buf).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let orientation = field.value.get_uint(0)? as u16;
    debug!(orientation, path = %path.display(), "exif orientation");
    Some(orientation)
}

fn scale_into_box(source: &RgbaImage, box_w: u32, box_h: u32, fit: ThumbnailFit) -> Result<RgbaImage> {
    match fit {
        ThumbnailFit::Stretch => resize_rgba(source, box_w, box_h),
        ThumbnailFit::Contain => {
            let (w, h) = fit_within(box_w, box_h, source.width(), source.height());
            let resized = resize_rgba(source, w, h)?;
            let (ox, oy) = center_offset(w, h, box_w, box_h);
            let mut canvas = RgbaImage::new(box_w, box_h);
            imageops::replace(&mut canvas, &resized, i64::from(ox), i64::from(oy));
            Ok(canvas)
        }
        ThumbnailFit::Cover => {
            // crop first so the resize never works on more than the source
            let (x, y, w, h) = cover_crop(box_w, box_h, source.width(), source.height());
            let region = imageops::crop_imm(source, x, y, w, h).to_image();
            resize_rgba(&region, box_w, box_h)
        }
    }
}

fn resize_rgba(source: &RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage> {
    if target_w == 0 || target_h == 0 {
        anyhow::bail!("resize dimensions must be positive");
    }
    if source.width() == target_w && source.height() == target_h {
        return Ok(source.clone());
    }

    let src_view = fir::images::ImageRef::new(
        source.width(),
        source.height(),
        source.as_raw(),
        fir::PixelType::U8x4,
    )
    .context("failed to create source view for thumbnail resize")?;
    let mut dst_image = fir::images::Image::new(target_w, target_h, fir::PixelType::U8x4);
    let options = fir::ResizeOptions::new()
        .resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::CatmullRom));
    let mut resizer = fir::Resizer::new();
    resizer
        .resize(&src_view, &mut dst_image, Some(&options))
        .context("thumbnail resize failed")?;
    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| anyhow!("failed to construct resized RGBA image"))
}
