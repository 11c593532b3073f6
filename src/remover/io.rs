use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Cursor;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;

use image::DynamicImage;
use image::ImageFormat;
use image::RgbaImage;

use crate::{Error, Result};

/// Decoded image together with what we know about where it came from
pub(crate) struct SourceImage {
    pub(crate) image: DynamicImage,
    pub(crate) format: Option<ImageFormat>,
    pub(crate) pixel_dims: Option<png::PixelDimensions>,
}

/// Read image file into memory and decode it, format is guessed from content
pub(crate) fn open_image(file: &Path) -> Result<SourceImage> {
    let file_contents = std::fs::read(file).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: file.to_owned(),
        },
        _ => Error::Read {
            path: file.to_owned(),
            source,
        },
    })?;
    let c = Cursor::new(file_contents.as_slice());
    let r = BufReader::new(c);
    let image_reader = image::ImageReader::new(r)
        .with_guessed_format()
        .map_err(|source| Error::Read {
            path: file.to_owned(),
            source,
        })?;
    let format = image_reader.format();
    let image = image_reader.decode()?;
    let pixel_dims = match format {
        Some(ImageFormat::Png) => read_png_pixel_dims(file_contents.as_slice()),
        _ => None,
    };
    Ok(SourceImage {
        image,
        format,
        pixel_dims,
    })
}

/// Read pixel density (pHYs chunk) from PNG file contents, if any
pub(crate) fn read_png_pixel_dims(file_contents: &[u8]) -> Option<png::PixelDimensions> {
    let decoder = png::Decoder::new(Cursor::new(file_contents));
    let reader = decoder.read_info().ok()?;
    reader.info().pixel_dims
}

/// Encode RGBA image as 8-bit PNG into the specified writer (includes pixel density header, if any)
pub(crate) fn encode_rgba_png<W: Write>(
    writer: W,
    img: &RgbaImage,
    pixel_dims: Option<png::PixelDimensions>,
) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, img.width(), img.height());

    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    // pHYs chunk, left out when the source had none
    encoder.set_pixel_dims(pixel_dims);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.as_raw())?;
    writer.finish()?;
    Ok(())
}

/// Save RGBA image to PNG file, replacing whatever is at that path
pub(crate) fn save_rgba_png(
    file: &Path,
    img: &RgbaImage,
    pixel_dims: Option<png::PixelDimensions>,
) -> Result<()> {
    let output = File::create(file).map_err(|source| Error::Write {
        path: file.to_owned(),
        source,
    })?;
    write_rgba_png(file, BufWriter::new(output), img, pixel_dims)
}

/// Encode and flush into an already opened output for `file`
/// I/O failures from the encoder count as write errors, not encode errors
fn write_rgba_png<W: Write>(
    file: &Path,
    mut writer: W,
    img: &RgbaImage,
    pixel_dims: Option<png::PixelDimensions>,
) -> Result<()> {
    let write_error = |source: std::io::Error| Error::Write {
        path: file.to_owned(),
        source,
    };
    encode_rgba_png(&mut writer, img, pixel_dims).map_err(|e| match e {
        Error::Encode(png::EncodingError::IoError(source)) => write_error(source),
        e => e,
    })?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
