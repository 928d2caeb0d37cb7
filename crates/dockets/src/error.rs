#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Failed to read input from {source_name}: {reason}")]
    InputRead { source_name: String, reason: String },

    #[error("Failed to write output to {path}: {reason}")]
    OutputWrite { path: String, reason: String },
}
