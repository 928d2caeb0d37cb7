use crate::input::InputArgs;
use crate::prelude::{eprintln, println, *};
use dockets_core::listing::{extract_docket_listing, DocketListing};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListingOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ListingOptions, global: crate::Global) -> Result<()> {
    let html = options.input.read()?;

    let rows = extract_docket_listing(&html);
    info!("Found {} docket row(s)", rows.len());

    if global.verbose {
        eprintln!("Found {} docket row(s)", rows.len());
    }

    if options.json {
        print_json(&rows)
    } else {
        output_table(&rows);
        Ok(())
    }
}

fn output_table(rows: &[DocketListing]) {
    if rows.is_empty() {
        println!("No docket rows found.");
        return;
    }

    let dash = "-".to_string();
    let mut table = new_table();
    table.add_row(prettytable::row!["Docket", "Type", "Date", "Description"]);
    for row in rows {
        table.add_row(prettytable::row![
            &row.docket_id,
            row.case_type.as_ref().unwrap_or(&dash),
            row.date.as_ref().unwrap_or(&dash),
            row.description.as_ref().unwrap_or(&dash)
        ]);
    }
    table.printstd();
}
