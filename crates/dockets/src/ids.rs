use crate::input::{write_json_file, InputArgs};
use crate::prelude::{eprintln, println, *};
use dockets_core::docket::extract_docket_ids;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct IdsOptions {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the ids as a pretty JSON array to this file
    #[arg(short, long, env = "DOCKETS_OUTPUT")]
    pub output: Option<PathBuf>,
}

pub fn run(options: IdsOptions, global: crate::Global) -> Result<()> {
    let text = options.input.read()?;

    let ids = extract_docket_ids(&text);
    info!("Found {} docket id(s)", ids.len());

    if global.verbose {
        eprintln!("Found {} docket id(s)", ids.len());
    }

    if let Some(path) = &options.output {
        write_json_file(path, &ids)?;
        info!("Wrote {} id(s) to {}", ids.len(), path.display());
    }

    if options.json {
        print_json(&ids)?;
    } else {
        for id in &ids {
            println!("{}", id);
        }
    }

    Ok(())
}
