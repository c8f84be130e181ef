//! Analyze command

use capsense_client::{
    render::{render_analysis, render_responses},
    AnalysisWorkspace, CapsenseApi,
};
use tracing::warn;

use crate::error::CliError;

/// Analyze each text in order, then print the panels for the last result and
/// every generated response. A failed text is reported and skipped.
pub async fn analyze_texts<A>(api: &A, texts: &[String]) -> Result<(), CliError>
where
    A: CapsenseApi + ?Sized,
{
    let mut workspace = AnalysisWorkspace::new();
    let mut failed = 0;

    for text in texts {
        if let Err(e) = workspace.analyze(api, text).await {
            warn!("Skipping text that could not be analyzed: {}", e);
            eprintln!("Could not analyze \"{}\": {}", text, e);
            failed += 1;
        }
    }

    print!("{}", render_analysis(workspace.current()));
    println!();
    print!(
        "{}",
        render_responses(workspace.results(), workspace.selected_index())
    );

    if failed > 0 {
        return Err(CliError::Command(format!(
            "{} of {} texts could not be analyzed",
            failed,
            texts.len()
        )));
    }
    Ok(())
}
