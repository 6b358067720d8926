//! Renders security-scan verdicts into styled PDF threat reports.
//!
//! The crate exposes a single rendering pipeline: a [`ThreatReport`] record is
//! turned into a finished PDF byte sequence by [`ReportRenderer`].  Fonts and
//! the logo image are resolved through an [`AssetProvider`] so that callers
//! (and tests) stay in control of where resources come from.

pub mod assets;
pub mod elements;
pub mod error;
pub mod palette;
pub mod renderer;
pub mod report;
pub mod sanitize;

pub use assets::{AssetProvider, LogoSource};
pub use error::RenderError;
pub use palette::{VerdictLevel, VerdictPalette};
pub use renderer::{PageSetup, ReportRenderer};
pub use report::ThreatReport;
