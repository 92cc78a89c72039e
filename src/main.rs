use clap::Parser;
use miette::Result;
use order_pay::domain::product::Catalog;
use order_pay::interfaces::console::Storefront;
use order_pay::telemetry;
use std::io;

/// Take one order from the menu and pay for it by card or bank transfer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let catalog = Catalog::default();

    // Prompts and confirmations share stdout; diagnostics go to stderr
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut storefront = Storefront::new(stdin.lock(), stdout.lock());
    storefront.run(&catalog)?;

    Ok(())
}
