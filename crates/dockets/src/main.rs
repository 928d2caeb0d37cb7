use crate::prelude::*;
use clap::Parser;

mod details;
mod error;
mod filings;
mod ids;
mod input;
mod listing;
mod prelude;
mod url;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Extract docket identifiers and case links from utility commission case-search pages"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DOCKETS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List every docket id found in the raw text of a page
    Ids(crate::ids::IdsOptions),

    /// List docket links (MatterSeq anchors) from a case-search page
    Details(crate::details::DetailsOptions),

    /// List docket links with their case type, date, and description columns
    Listing(crate::listing::ListingOptions),

    /// List the public documents filed on a case page
    Filings(crate::filings::FilingsOptions),

    /// Print case page URLs for docket ids
    Url(crate::url::UrlOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Ids(options) => crate::ids::run(options, app.global),
        SubCommands::Details(options) => crate::details::run(options, app.global),
        SubCommands::Listing(options) => crate::listing::run(options, app.global),
        SubCommands::Filings(options) => crate::filings::run(options, app.global),
        SubCommands::Url(options) => crate::url::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
