//! Dashboard command

use capsense_client::{render::render_dashboard, CapsenseApi, DashboardLoader};
use tracing::info;

use crate::error::CliError;

/// Load the dashboard once and print it
pub async fn show_dashboard<A>(api: &A, json: bool) -> Result<(), CliError>
where
    A: CapsenseApi + ?Sized,
{
    info!("Loading dashboard from {}", api.base_url());

    let mut dashboard = DashboardLoader::new();
    let loaded = dashboard.load(api).await.map(|rows| rows.len());

    match loaded {
        Ok(_) if json => {
            println!("{}", serde_json::to_string_pretty(dashboard.rows())?);
            Ok(())
        }
        Ok(_) => {
            print!("{}", render_dashboard(&dashboard));
            Ok(())
        }
        Err(e) => {
            print!("{}", render_dashboard(&dashboard));
            Err(CliError::Api(e))
        }
    }
}
