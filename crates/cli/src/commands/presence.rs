use anyhow::Result;
use linkbio_service::PresenceClient;

use crate::Settings;

pub(crate) async fn run(settings: &Settings) -> Result<()> {
    let client = PresenceClient::new(&settings.presence_url)?;
    let presence = client.fetch(&settings.profile.discord_id).await?;

    println!("{} ({})", presence.display_name(), presence.status);
    for activity in presence.visible_activities() {
        let detail = activity.details.as_deref().unwrap_or_default();
        match activity.image_url() {
            Some(image) => println!("  {} {detail} [{image}]", activity.kind),
            None => println!("  {} {detail}", activity.kind),
        }
    }
    Ok(())
}
