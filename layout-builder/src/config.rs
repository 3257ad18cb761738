use std::{
    env, fs,
    path::{Path, PathBuf},
};

use snafu::ResultExt;

use crate::{error::CreateOutputDirSnafu, Result};

/// Names a layout in generated file names, C symbols and the firmware menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDescriptor {
    pub id: &'static str,
    pub name: &'static str,
}

impl LayoutDescriptor {
    pub fn image_symbol(&self, state: &str) -> String {
        format!("{}_{state}_image", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
    /// Also emit every image as a C byte array for firmware builds that link
    /// the images statically.
    pub embed_images: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            out_dir: PathBuf::from("out"),
            embed_images: false,
        }
    }
}

impl OutputConfig {
    pub const OUT_DIR_VAR: &'static str = "LAYOUT_OUT_DIR";
    pub const EMBED_IMAGES_VAR: &'static str = "LAYOUT_EMBED_IMAGES";

    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        OutputConfig {
            out_dir: lookup(Self::OUT_DIR_VAR)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default.out_dir),
            embed_images: lookup(Self::EMBED_IMAGES_VAR)
                .map(|value| matches!(value.trim(), "1" | "true" | "yes" | "on"))
                .unwrap_or(default.embed_images),
        }
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    pub(crate) fn ensure_out_dir(&self) -> Result<&Path> {
        fs::create_dir_all(&self.out_dir).context(CreateOutputDirSnafu {
            path: &self.out_dir,
        })?;
        Ok(&self.out_dir)
    }
}
