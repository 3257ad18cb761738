use std::{io, path::PathBuf};

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not create output directory {}: {source}", path.display()))]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[snafu(display("Could not write {}: {source}", path.display()))]
    WriteSource { path: PathBuf, source: io::Error },
    #[snafu(display("Could not save image {}: {source}", path.display()))]
    SaveImage {
        path: PathBuf,
        source: image::ImageError,
    },
    #[snafu(display("Could not encode image {symbol}: {source}"))]
    EncodeImage {
        symbol: String,
        source: image::ImageError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
