use crate::input::{write_json_file, InputArgs};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use dockets_core::case::{case_id_from_url, classify_page, resolve_href, PageKind, DEFAULT_BASE_URL};
use dockets_core::docket::DocketId;
use dockets_core::filings::{extract_filings, FilingsOutput};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FilingsOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Docket id of the case page (e.g. 22-M-0149)
    #[arg(short, long)]
    pub case: Option<String>,

    /// URL the page was saved from; the docket id is read from its MatterCaseNo parameter
    #[arg(long)]
    pub page_url: Option<String>,

    /// Base URL used to resolve relative document links
    #[arg(long, env = "DOCKETS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Keep document links exactly as they appear in the page
    #[arg(long)]
    pub raw_links: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the filings as JSON; defaults to `filing-{case}.json` when no file is given
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Option<PathBuf>>,
}

/// File the filings are saved to, if `--output` was passed.
fn output_path(output: &Option<Option<PathBuf>>, case: &DocketId) -> Option<PathBuf> {
    output
        .as_ref()
        .map(|path| path.clone().unwrap_or_else(|| PathBuf::from(format!("filing-{case}.json"))))
}

/// Describe why a page URL does not look like a case-master page.
fn page_url_warning(url: &str) -> Option<String> {
    match classify_page(url) {
        PageKind::CaseMaster => None,
        PageKind::Document => Some(format!("{url} is a document page, not a case page")),
        PageKind::Other => Some(format!("{url} does not look like a case page")),
    }
}

/// Pick the docket id from `--case` or, failing that, from `--page-url`.
fn resolve_case(options: &FilingsOptions) -> Result<DocketId> {
    let raw = match (&options.case, &options.page_url) {
        (Some(case), _) => case.clone(),
        (None, Some(url)) => {
            if let Some(warning) = page_url_warning(url) {
                warn!("{}", warning);
            }
            case_id_from_url(url)
                .ok_or_else(|| eyre!("No MatterCaseNo parameter in page URL: {}", url))?
        }
        (None, None) => return Err(eyre!("Either --case or --page-url is required")),
    };

    Ok(DocketId::parse(&raw)?)
}

pub fn run(options: FilingsOptions, global: crate::Global) -> Result<()> {
    let case = resolve_case(&options)?;
    let html = options.input.read()?;

    let mut output = extract_filings(&html, case.as_str())
        .wrap_err_with(|| format!("Failed to read filings for case {case}"))?;

    for skipped in &output.skipped {
        warn!("Skipped row {}: {}", skipped.index, skipped.reason);
    }
    info!(
        "Found {} filing(s) for case {} ({} skipped)",
        output.filings.len(),
        case,
        output.skipped.len()
    );

    if !options.raw_links {
        for filing in &mut output.filings {
            if !filing.url.is_empty() {
                filing.url = resolve_href(&options.base_url, &filing.url)?;
            }
        }
    }

    if let Some(path) = output_path(&options.output, &case) {
        write_json_file(&path, &output)?;
        info!("Wrote {} filing(s) to {}", output.filings.len(), path.display());
    }

    if global.verbose {
        eprintln!(
            "Case {}: {} filing(s), {} skipped row(s)",
            case,
            output.filings.len(),
            output.skipped.len()
        );
    }

    if options.json {
        print_json(&output)
    } else {
        output_formatted(&output);
        Ok(())
    }
}

fn output_formatted(output: &FilingsOutput) {
    if std::io::stdout().is_terminal() {
        eprintln!("\n{}", "=".repeat(80).bright_cyan());
        eprintln!(
            "{}",
            format!("FILINGS FOR CASE {}", output.case)
                .bright_cyan()
                .bold()
        );
        eprintln!("{}\n", "=".repeat(80).bright_cyan());
    }

    if output.filings.is_empty() {
        println!("No filings found.");
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row![
            "#", "Filed", "Type", "Document", "Organization", "Item", "File", "URL"
        ]);
        for filing in &output.filings {
            table.add_row(prettytable::row![
                &filing.serial,
                &filing.date_filed,
                &filing.doc_type,
                &filing.name,
                &filing.organization,
                &filing.item_no,
                &filing.file_name,
                &filing.url
            ]);
        }
        table.printstd();
    }

    if !output.skipped.is_empty() {
        eprintln!(
            "\n{}",
            format!("{} row(s) skipped", output.skipped.len()).yellow()
        );
        for skipped in &output.skipped {
            eprintln!("  row {}: {}", skipped.index, skipped.reason);
        }
    }
}
