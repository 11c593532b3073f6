use std::path::Path;
use std::path::PathBuf;

use image::ImageFormat;

use crate::Result;

mod io;
mod threshold;

pub use threshold::{THRESHOLD, TRANSPARENT_WHITE, clear_near_white, is_near_white};

/// What happened to a successfully processed image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: Option<ImageFormat>,
    pub cleared: usize,
}

/// Turns near-white pixels of one image file transparent and rewrites it in place
pub struct BackgroundRemover {
    file: PathBuf,
    pub verbose: bool,
}

impl BackgroundRemover {
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn process(self) -> Result<Summary> {
        let source = io::open_image(&self.file)?;
        let format = source.format;
        log::debug!(
            "{}: decoded as {:?} ({:?})",
            self.file.display(),
            format,
            source.image.color()
        );

        // Every pixel gets an alpha channel, even if the source had none
        let mut image_rgba = source.image.to_rgba8();
        let (width, height) = image_rgba.dimensions();
        if self.verbose {
            println!("{}: {}x{}", self.file.display(), width, height);
        }

        let cleared = threshold::clear_near_white(&mut image_rgba);
        if self.verbose {
            println!(
                "{}: {} of {} pixels made transparent",
                self.file.display(),
                cleared,
                width as usize * height as usize
            );
        }

        if let Some(dims) = source.pixel_dims {
            log::debug!("{}: keeping pixel density {:?}", self.file.display(), dims);
        }
        io::save_rgba_png(&self.file, &image_rgba, source.pixel_dims)?;
        log::info!("{}: saved", self.file.display());

        Ok(Summary {
            path: self.file,
            width,
            height,
            format,
            cleared,
        })
    }
}

/// Make near-white pixels of the image at `path` transparent, overwriting it as PNG
pub fn remove_white_background(path: impl AsRef<Path>) -> Result<Summary> {
    BackgroundRemover::new(path.as_ref().to_owned()).process()
}
