use crate::input::{write_json_file, InputArgs};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use dockets_core::docket::{extract_docket_details, DocketRecord};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DetailsOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the records as pretty JSON to this file
    #[arg(short, long, env = "DOCKETS_OUTPUT")]
    pub output: Option<PathBuf>,
}

pub fn run(options: DetailsOptions, global: crate::Global) -> Result<()> {
    let html = options.input.read()?;

    let records = extract_docket_details(&html);
    info!("Found {} docket link(s)", records.len());

    if let Some(path) = &options.output {
        write_json_file(path, &records)?;
        info!("Wrote {} record(s) to {}", records.len(), path.display());
        if global.verbose {
            eprintln!("Wrote {} record(s) to {}", records.len(), path.display());
        }
    }

    if options.json {
        print_json(&records)
    } else {
        output_formatted(&records);
        Ok(())
    }
}

fn output_formatted(records: &[DocketRecord]) {
    if std::io::stdout().is_terminal() {
        eprintln!("\n{}", "=".repeat(80).bright_cyan());
        eprintln!(
            "{}",
            format!("DOCKET LINKS ({})", records.len())
                .bright_cyan()
                .bold()
        );
        eprintln!("{}\n", "=".repeat(80).bright_cyan());
    }

    if records.is_empty() {
        println!("No docket links found.");
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Docket", "Link"]);
    for record in records {
        table.add_row(prettytable::row![&record.docket_id, &record.href]);
    }
    table.printstd();
}
