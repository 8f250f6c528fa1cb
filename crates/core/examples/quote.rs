//! Builds a sample quote from the bundled rate sheet and prints the
//! itinerary table plus the rendered voucher document.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use itinera::{
    document::{VoucherRenderer, VoucherView, itinerary_table},
    fixtures,
    pricing::format_jpy,
    voucher::{DocumentKind, VoucherDraft},
};

/// Arguments for the quote example
#[derive(Debug, Parser)]
struct QuoteArgs {
    /// Optional path to write the rendered Typst document to
    #[clap(short, long)]
    out: Option<PathBuf>,
}

#[expect(clippy::print_stdout, reason = "example writes its output to the terminal")]
fn main() -> Result<(), Box<dyn Error>> {
    let args = QuoteArgs::parse();

    let cart = fixtures::sample_cart();

    for (day, items) in cart.items_by_day() {
        println!("Day {day}: {} service(s)", items.len());
    }

    println!();
    println!("{}", itinerary_table(cart.items()));
    println!("Running total: {}", format_jpy(cart.total()));
    println!();

    let draft = VoucherDraft::build(fixtures::sample_trip(), DocumentKind::Quote, &cart)?;
    let reference = format!("Q-{}", draft.date_start());
    let view = VoucherView::from_draft(&reference, &draft);

    let renderer = match args.out {
        Some(path) => VoucherRenderer::with_output(path),
        None => VoucherRenderer::new(),
    };

    println!("{}", renderer.write(&view)?);

    Ok(())
}
