//! Turns a [`ThreatReport`] into a finished PDF document.

use chrono::{Local, NaiveDateTime};
use genpdf::elements::{Break, LinearLayout, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Element, Margins, SimplePageDecorator, Size};

use crate::assets::AssetProvider;
use crate::elements::{scaled_logo, BannerCell};
use crate::error::RenderError;
use crate::palette::{VerdictLevel, VerdictPalette};
use crate::report::ThreatReport;
use crate::sanitize::{self, SubstitutionTable};

const DOCUMENT_TITLE: &str = "Threat Scan Report";
/// Shown in place of the IP list when the scan recorded no addresses.
const EMPTY_LIST_PLACEHOLDER: &str = "\u{2014}";

/// Page dimensions and fixed layout measurements, all in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSetup {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_top_mm: f64,
    pub margin_right_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    pub banner_height_mm: f64,
    pub logo_width_mm: f64,
}

impl Default for PageSetup {
    fn default() -> Self {
        // A4 with a larger bottom margin acting as the page-break threshold.
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_top_mm: 12.0,
            margin_right_mm: 10.0,
            margin_bottom_mm: 18.0,
            margin_left_mm: 10.0,
            banner_height_mm: 10.0,
            logo_width_mm: 14.0,
        }
    }
}

impl PageSetup {
    /// Width available to full-width elements once the margins are applied.
    pub fn printable_width(&self) -> f64 {
        self.page_width_mm - self.margin_left_mm - self.margin_right_mm
    }

    fn margins(&self) -> Margins {
        Margins::trbl(
            self.margin_top_mm,
            self.margin_right_mm,
            self.margin_bottom_mm,
            self.margin_left_mm,
        )
    }
}

/// Stateless renderer mapping one report shape to one fixed visual layout.
///
/// Each call builds a fresh document, so a single renderer value can serve
/// concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct ReportRenderer {
    assets: AssetProvider,
    setup: PageSetup,
    palette: VerdictPalette,
    substitutions: SubstitutionTable,
}

impl ReportRenderer {
    /// Creates a renderer with default layout and palette backed by `assets`.
    pub fn new(assets: AssetProvider) -> Self {
        Self {
            assets,
            ..Self::default()
        }
    }

    /// Sets the page setup and returns the updated renderer.
    pub fn with_page_setup(mut self, setup: PageSetup) -> Self {
        self.setup = setup;
        self
    }

    /// Sets the verdict palette and returns the updated renderer.
    pub fn with_palette(mut self, palette: VerdictPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Renders the report, embedding the current local time as the generation
    /// timestamp.
    pub fn render(&self, report: &ThreatReport) -> Result<Vec<u8>, RenderError> {
        self.render_at(report, Local::now().naive_local())
    }

    /// Renders the report with an explicit generation timestamp.
    ///
    /// Apart from the timestamp the output is a pure function of the report,
    /// which is what makes byte-level determinism checks possible.
    pub fn render_at(
        &self,
        report: &ThreatReport,
        generated: NaiveDateTime,
    ) -> Result<Vec<u8>, RenderError> {
        let font_family = self.assets.font_family()?;
        let logo = self.assets.logo_image()?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(DOCUMENT_TITLE);
        doc.set_paper_size(Size::new(self.setup.page_width_mm, self.setup.page_height_mm));
        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.setup.margins());
        doc.set_page_decorator(decorator);

        // Header: logo on the left, title and generation line on the right.
        let mut title_block = LinearLayout::vertical();
        title_block.push(
            Paragraph::new(self.safe_text(DOCUMENT_TITLE)?)
                .styled(Style::new().bold().with_font_size(20)),
        );
        title_block.push(
            Paragraph::new(
                self.safe_text(&format!("Generated: {}", generated.format("%Y-%m-%d %H:%M:%S")))?,
            )
            .styled(Style::new().with_font_size(10)),
        );
        let mut header = TableLayout::new(vec![1, 6]);
        header
            .row()
            .element(scaled_logo(logo, self.setup.logo_width_mm)?)
            .element(title_block)
            .push()?;
        doc.push(header);
        doc.push(Break::new(1.0));

        // Verdict banner across the full printable width.
        let level = VerdictLevel::parse(&report.level);
        if level == VerdictLevel::Unknown && !report.level.trim().is_empty() {
            log::warn!(
                "unrecognized verdict level {:?}, using the neutral banner color",
                report.level
            );
        }
        doc.push(BannerCell::new(
            self.safe_text(&banner_line(report))?,
            self.palette.color_for(level),
            self.setup.banner_height_mm,
        ));
        doc.push(Break::new(1.0));

        // Findings, one wrapped line per entry in insertion order.
        doc.push(Paragraph::new("Reasons:").styled(Style::new().with_font_size(12)));
        for reason in &report.reasons {
            doc.push(
                Paragraph::new(self.safe_text(&format!("- {reason}"))?)
                    .styled(Style::new().with_font_size(12)),
            );
        }
        doc.push(Break::new(0.5));

        doc.push(Paragraph::new("IPs:").styled(Style::new().with_font_size(12)));
        doc.push(
            Paragraph::new(self.safe_text(&ips_line(report))?)
                .styled(Style::new().with_font_size(12)),
        );
        doc.push(Break::new(0.5));

        doc.push(
            Paragraph::new(self.safe_text(&format!("Scan time: {} s", report.scan_time))?)
                .styled(Style::new().with_font_size(10)),
        );

        let mut bytes = Vec::new();
        doc.render(&mut bytes)?;
        log::debug!("rendered threat report ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Applies the substitution table and verifies the result is encodable.
    fn safe_text(&self, raw: &str) -> Result<String, RenderError> {
        let cleaned = self.substitutions.apply(raw);
        sanitize::ensure_encodable(&cleaned)?;
        Ok(cleaned)
    }
}

/// Composes the raw banner text; sanitization turns the en-dash into `-`.
fn banner_line(report: &ThreatReport) -> String {
    format!(
        "{} \u{2013} {}",
        report.level.to_uppercase(),
        report.summary
    )
}

/// Joins the address list, or yields the placeholder for an empty scan.
fn ips_line(report: &ThreatReport) -> String {
    if report.ips.is_empty() {
        EMPTY_LIST_PLACEHOLDER.to_string()
    } else {
        report.ips.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_line_uppercases_and_sanitizes() {
        let renderer = ReportRenderer::default();
        let report = ThreatReport::new("green", "No threats");
        let text = renderer.safe_text(&banner_line(&report)).unwrap();
        assert_eq!(text, "GREEN - No threats");
    }

    #[test]
    fn banner_line_keeps_unrecognized_levels_visible() {
        let renderer = ReportRenderer::default();
        let report = ThreatReport::new("blue", "odd verdict");
        let text = renderer.safe_text(&banner_line(&report)).unwrap();
        assert_eq!(text, "BLUE - odd verdict");
    }

    #[test]
    fn empty_ip_list_renders_the_placeholder() {
        let renderer = ReportRenderer::default();
        let report = ThreatReport::default();
        assert_eq!(ips_line(&report), "\u{2014}");
        // After sanitization the placeholder is a plain hyphen, never "".
        assert_eq!(renderer.safe_text(&ips_line(&report)).unwrap(), "-");
    }

    #[test]
    fn ip_list_is_comma_space_joined() {
        let report = ThreatReport::default().with_ips(["10.0.0.1", "10.0.0.2"]);
        assert_eq!(ips_line(&report), "10.0.0.1, 10.0.0.2");
    }

    #[test]
    fn printable_width_tracks_the_margins() {
        let default = PageSetup::default();
        assert!((default.printable_width() - 190.0).abs() < f64::EPSILON);

        let wide_margins = PageSetup {
            margin_left_mm: 25.0,
            margin_right_mm: 15.0,
            ..PageSetup::default()
        };
        assert!((wide_margins.printable_width() - 170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_with_typographic_punctuation_stays_encodable() {
        let renderer = ReportRenderer::default();
        let report = ThreatReport::new("red", "\u{201C}botnet\u{201D} beacon \u{2014} blocked");
        let text = renderer.safe_text(&banner_line(&report)).unwrap();
        assert_eq!(text, "RED - \"botnet\" beacon - blocked");
    }
}
