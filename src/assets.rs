//! Font and logo resources consumed by the renderer.
//!
//! Assets are resolved lazily at render time.  A missing or unreadable
//! resource is a hard failure of the render call; there is no silent fallback
//! to a substitute font or image.

use std::path::{Path, PathBuf};

use genpdf::fonts::{self, FontData, FontFamily};

use crate::error::RenderError;

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

const DEFAULT_LOGO_FILE: &str = "shield_logo.png";

fn bundled_asset_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Where the logo image comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum LogoSource {
    /// Logo referenced by a file path, read at render time.
    Path(PathBuf),
    /// Logo supplied as already-loaded image bytes.
    Bytes(Vec<u8>),
}

/// Resolves the font family and logo image used by the renderer.
#[derive(Clone, Debug)]
pub struct AssetProvider {
    fonts_dir: PathBuf,
    logo: LogoSource,
}

impl Default for AssetProvider {
    fn default() -> Self {
        Self::bundled()
    }
}

impl AssetProvider {
    /// Provider pointing at the crate's bundled `assets/` directory.
    pub fn bundled() -> Self {
        let assets = bundled_asset_directory();
        Self {
            fonts_dir: assets.join("fonts"),
            logo: LogoSource::Path(assets.join(DEFAULT_LOGO_FILE)),
        }
    }

    /// Overrides the directory searched for the font files.
    pub fn with_fonts_dir(mut self, fonts_dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = fonts_dir.into();
        self
    }

    /// Overrides the logo source.
    pub fn with_logo(mut self, logo: LogoSource) -> Self {
        self.logo = logo;
        self
    }

    /// Loads the font family, checking each required face individually so the
    /// error names exactly what is missing.
    pub fn font_family(&self) -> Result<FontFamily<FontData>, RenderError> {
        if !self.fonts_dir.exists() {
            return Err(RenderError::asset(
                format!("font directory {}", self.fonts_dir.display()),
                "directory not found; see assets/fonts/README.md for setup",
            ));
        }
        self.ensure_required_fonts_present()?;

        fonts::from_files(&self.fonts_dir, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
            RenderError::asset(
                format!(
                    "font family '{}' in {}",
                    DEFAULT_FONT_FAMILY_NAME,
                    self.fonts_dir.display()
                ),
                err,
            )
        })
    }

    fn ensure_required_fonts_present(&self) -> Result<(), RenderError> {
        let missing: Vec<_> = FONT_FILES
            .iter()
            .map(|name| self.fonts_dir.join(name))
            .filter(|candidate| !candidate.is_file())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            let display_list = missing
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Err(RenderError::asset(
                format!("font files: {display_list}"),
                "missing; see assets/fonts/README.md for instructions",
            ))
        }
    }

    /// Decodes the logo into an image ready for placement on the page.
    pub fn logo_image(&self) -> Result<image::DynamicImage, RenderError> {
        match &self.logo {
            LogoSource::Bytes(bytes) => image::load_from_memory(bytes)
                .map_err(|err| RenderError::asset("logo image bytes", err)),
            LogoSource::Path(path) => decode_logo_from_path(path),
        }
    }

    /// Indicates whether every resource needed for a render is present.
    ///
    /// Used by tests to skip rendering when the bundled fonts have not been
    /// downloaded.
    pub fn assets_available(&self) -> bool {
        let fonts_present = self.fonts_dir.exists()
            && FONT_FILES
                .iter()
                .map(|name| self.fonts_dir.join(name))
                .all(|path| path.is_file());
        let logo_present = match &self.logo {
            LogoSource::Bytes(bytes) => !bytes.is_empty(),
            LogoSource::Path(path) => path.is_file(),
        };
        fonts_present && logo_present
    }
}

fn decode_logo_from_path(path: &Path) -> Result<image::DynamicImage, RenderError> {
    let reader = image::io::Reader::open(path)
        .map_err(|err| RenderError::asset(format!("logo image {}", path.display()), err))?;
    reader
        .with_guessed_format()
        .map_err(|err| RenderError::asset(format!("logo image {}", path.display()), err))?
        .decode()
        .map_err(|err| RenderError::asset(format!("logo image {}", path.display()), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_directory_is_asset_unavailable() {
        let provider = AssetProvider::bundled().with_fonts_dir("/nonexistent/fonts");
        let err = provider.font_family().unwrap_err();
        assert!(matches!(err, RenderError::AssetUnavailable { .. }));
    }

    #[test]
    fn missing_logo_path_is_asset_unavailable() {
        let provider = AssetProvider::bundled()
            .with_logo(LogoSource::Path(PathBuf::from("/nonexistent/logo.png")));
        let err = provider.logo_image().unwrap_err();
        assert!(matches!(err, RenderError::AssetUnavailable { .. }));
    }

    #[test]
    fn undecodable_logo_bytes_are_asset_unavailable() {
        let provider = AssetProvider::bundled().with_logo(LogoSource::Bytes(vec![0, 1, 2, 3]));
        let err = provider.logo_image().unwrap_err();
        assert!(matches!(err, RenderError::AssetUnavailable { .. }));
    }
}
