//! Voucher document rendering
//!
//! The downloadable voucher artifact is rendered as Typst source with a
//! deliberately minimal layout; compiling it into the finished PDF happens
//! downstream. A plain-text itinerary table is also available for terminal
//! display at the sales desk.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::PathBuf;

use jiff::civil::Date;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    items::CartItem,
    pricing::format_jpy,
    voucher::{DocumentKind, VoucherDraft},
};

/// Letterhead printed at the top of every voucher document.
pub const LETTERHEAD: &str = "Itinera Travel DMC";

/// Sales desk contact printed under the letterhead.
pub const SALES_CONTACT: &str = "sales@itinera-travel.example";

/// Errors that can occur while writing a rendered document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to write the output file.
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Data a voucher document is rendered from.
///
/// A borrowed view, so both unsaved drafts and persisted records can feed
/// the renderer.
#[derive(Clone, Copy, Debug)]
pub struct VoucherView<'a> {
    /// Reference printed on the document, usually the voucher UUID.
    pub reference: &'a str,

    /// Lead guest name(s).
    pub guest_name: &'a str,

    /// Total number of travellers.
    pub pax_count: u32,

    /// First day of travel.
    pub date_start: Date,

    /// Last day of travel.
    pub date_end: Date,

    /// Cities covered.
    pub cities: &'a str,

    /// Kind of document.
    pub kind: DocumentKind,

    /// Itinerary line items.
    pub items: &'a [CartItem],

    /// Package total in JPY.
    pub total: u64,
}

impl<'a> VoucherView<'a> {
    /// View over an unsaved draft, under the given reference.
    #[must_use]
    pub fn from_draft(reference: &'a str, draft: &'a VoucherDraft) -> Self {
        Self {
            reference,
            guest_name: draft.guest_name(),
            pax_count: draft.pax_count(),
            date_start: draft.date_start(),
            date_end: draft.date_end(),
            cities: draft.cities(),
            kind: draft.kind(),
            items: draft.items(),
            total: draft.total(),
        }
    }
}

/// Placeholder voucher document renderer.
///
/// Output is Typst source. The layout is a stub: letterhead, trip header
/// and an itinerary table, nothing more.
#[derive(Debug, Clone, Default)]
pub struct VoucherRenderer {
    out: Option<PathBuf>,
}

impl VoucherRenderer {
    /// Creates a renderer that renders to memory only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that [`write`](Self::write)s to the given path.
    #[must_use]
    pub fn with_output(out: PathBuf) -> Self {
        Self { out: Some(out) }
    }

    /// Renders the Typst source for a voucher.
    #[must_use]
    pub fn render(&self, view: &VoucherView<'_>) -> String {
        let mut doc = String::new();

        _ = writeln!(doc, "#set page(paper: \"a4\")");
        _ = writeln!(doc);
        _ = writeln!(doc, "= {LETTERHEAD}");
        _ = writeln!(doc, "{SALES_CONTACT}");
        _ = writeln!(doc);
        _ = writeln!(doc, "== {} {}", view.kind, document_noun(view.kind));
        _ = writeln!(doc);
        _ = writeln!(doc, "/ Reference: {}", view.reference);
        _ = writeln!(doc, "/ Guest: {}", view.guest_name);
        _ = writeln!(doc, "/ Pax: {}", view.pax_count);
        _ = writeln!(doc, "/ Travel dates: {} to {}", view.date_start, view.date_end);
        _ = writeln!(doc, "/ Cities: {}", view.cities);
        _ = writeln!(doc);
        _ = writeln!(doc, "#table(");
        _ = writeln!(doc, "  columns: (auto, auto, 1fr, auto, auto),");
        _ = writeln!(
            doc,
            "  [*Day*], [*Type*], [*Service*], [*Pax*], [*Cost (JPY)*],"
        );

        for item in view.items {
            _ = writeln!(
                doc,
                "  [{}], [{}], [{}], [{}], [{}],",
                item.day(),
                item.kind(),
                typst_escape(item.name()),
                item.pax(),
                format_jpy(item.cost()),
            );
        }

        _ = writeln!(doc, ")");
        _ = writeln!(doc);
        _ = writeln!(doc, "*Package total: {}*", format_jpy(view.total));

        doc
    }

    /// Renders the voucher and writes it to the configured output path, if
    /// any.
    ///
    /// # Errors
    ///
    /// Returns an error when the output file cannot be created or written.
    pub fn write(&self, view: &VoucherView<'_>) -> Result<String, DocumentError> {
        let doc = self.render(view);

        if let Some(out) = &self.out {
            let mut file = File::create(out)?;

            file.write_all(doc.as_bytes())?;
        }

        Ok(doc)
    }
}

/// Plain-text itinerary table for terminal display, items sorted by day.
#[must_use]
pub fn itinerary_table(items: &[CartItem]) -> String {
    let mut sorted: Vec<&CartItem> = items.iter().collect();

    sorted.sort_by_key(|item| item.day());

    let mut builder = Builder::default();

    builder.push_record(["Day", "Type", "Service Name", "Details", "Pax", "Cost (JPY)"]);

    for item in sorted {
        builder.push_record([
            item.day().to_string(),
            item.kind().to_string(),
            item.name().to_owned(),
            truncate_details(item.details()),
            item.pax().to_string(),
            format_jpy(item.cost()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::sharp());
    table.modify(Columns::last(), Alignment::right());

    table.to_string()
}

fn document_noun(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Quote => "Quotation",
        DocumentKind::Service => "Voucher",
    }
}

// Square brackets delimit content blocks in Typst markup.
fn typst_escape(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

fn truncate_details(details: &str) -> String {
    const MAX: usize = 40;

    if details.chars().count() <= MAX {
        return details.to_owned();
    }

    let truncated: String = details.chars().take(MAX).collect();

    format!("{truncated}...")
}
