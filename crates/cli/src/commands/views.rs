use anyhow::Result;
use linkbio_http::ViewsResponse;
use linkbio_service::ViewCounterService;

use crate::Settings;

pub(crate) async fn run(settings: &Settings, increment: bool) -> Result<()> {
    let service = ViewCounterService::from_config(&settings.views)?;
    let views = if increment { service.increment().await } else { service.get_count().await };
    println!("{}", serde_json::to_string(&ViewsResponse { views })?);
    Ok(())
}
