use std::path::PathBuf;

use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, derive_more::Error, From)]
pub enum Error {
    /// Input file does not exist
    #[display("No such file: {}", path.display())]
    NotFound { path: PathBuf },
    /// Input file exists but could not be read
    #[display("Unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Output file could not be created or written
    #[display("Unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    // -- Externals
    #[from]
    #[display("Unable to decode image: {_0}")]
    Decode(#[error(source)] image::error::ImageError),
    #[from]
    #[display("Unable to encode PNG: {_0}")]
    Encode(#[error(source)] png::EncodingError),
}
