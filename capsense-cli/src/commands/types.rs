//! TypeScript definitions for the front end

use capsense_types::generate_all_definitions;
use std::path::Path;
use tracing::info;

use crate::error::CliError;

pub async fn write_types(output: Option<&Path>) -> Result<(), CliError> {
    let mut definitions = generate_all_definitions()?;
    definitions.push('\n');

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, definitions).await?;
            info!("Wrote TypeScript definitions to {}", path.display());
        }
        None => print!("{definitions}"),
    }
    Ok(())
}
