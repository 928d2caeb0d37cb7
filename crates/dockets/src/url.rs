use crate::input::read_docket_list;
use crate::prelude::{println, *};
use dockets_core::case::{case_master_url, DEFAULT_BASE_URL};
use dockets_core::docket::DocketId;
use std::path::PathBuf;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct UrlOptions {
    /// Docket ids (e.g. 22-M-0149)
    #[arg(value_name = "DOCKET", required_unless_present = "from_json")]
    pub dockets: Vec<String>,

    /// Read docket ids from a JSON array, such as the file written by `ids --output`
    #[arg(long, value_name = "FILE")]
    pub from_json: Option<PathBuf>,

    /// Skip this many ids at the start of the --from-json list
    #[arg(long, default_value = "0", requires = "from_json")]
    pub skip: usize,

    /// Base URL of the matter management pages
    #[arg(long, env = "DOCKETS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Build case page URLs, failing on the first malformed docket id.
pub fn case_urls(dockets: &[String], base_url: &str) -> Result<Vec<String>> {
    dockets
        .iter()
        .map(|raw| -> Result<String> {
            let docket = DocketId::parse(raw)?;
            Ok(case_master_url(base_url, &docket))
        })
        .collect()
}

/// Positional ids first, then the ids from `--from-json` after skipping.
fn collect_dockets(options: &UrlOptions) -> Result<Vec<String>> {
    let mut dockets = options.dockets.clone();

    if let Some(path) = &options.from_json {
        let listed = read_docket_list(path, options.skip)?;
        debug!(
            "Loaded {} docket id(s) from {} (skipped {})",
            listed.len(),
            path.display(),
            options.skip
        );
        dockets.extend(listed);
    }

    Ok(dockets)
}

pub fn run(options: UrlOptions, _global: crate::Global) -> Result<()> {
    let dockets = collect_dockets(&options)?;
    let urls = case_urls(&dockets, &options.base_url)?;
    debug!("Built {} case URL(s)", urls.len());

    for url in urls {
        println!("{}", url);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_urls_builds_each_url() {
        let dockets = vec!["22-M-0149".to_string(), "24-E-0165".to_string()];
        let urls = case_urls(&dockets, "http://localhost/mm").unwrap();
        assert_eq!(
            urls,
            vec![
                "http://localhost/mm/CaseMaster.aspx?MatterCaseNo=22-M-0149",
                "http://localhost/mm/CaseMaster.aspx?MatterCaseNo=24-E-0165",
            ]
        );
    }

    #[test]
    fn test_case_urls_rejects_invalid_docket() {
        let dockets = vec!["22-M-0149".to_string(), "not-a-docket".to_string()];
        let err = case_urls(&dockets, DEFAULT_BASE_URL).unwrap_err();
        assert!(err.to_string().contains("not-a-docket"));
    }

    #[test]
    fn test_collect_dockets_from_json_with_skip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output_cases.json");
        std::fs::write(&path, r#"["24-E-0165", "22-M-0645", "18-E-0138"]"#).unwrap();

        let options = UrlOptions {
            dockets: vec!["22-M-0149".to_string()],
            from_json: Some(path),
            skip: 2,
            base_url: DEFAULT_BASE_URL.to_string(),
        };

        let dockets = collect_dockets(&options).unwrap();
        assert_eq!(dockets, vec!["22-M-0149", "18-E-0138"]);

        let urls = case_urls(&dockets, &options.base_url).unwrap();
        assert!(urls[1].ends_with("CaseMaster.aspx?MatterCaseNo=18-E-0138"));
    }

    #[test]
    fn test_collect_dockets_missing_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = UrlOptions {
            dockets: Vec::new(),
            from_json: Some(dir.path().join("missing.json")),
            skip: 0,
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        assert!(collect_dockets(&options).is_err());
    }
}
