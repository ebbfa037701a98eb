use std::env;
use std::time::Duration;

use log::warn;
use recipe_widget::{render, Provider, RecipeFetcher, SizeClass, Thumbnail, WidgetConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let snapshot = args.iter().any(|arg| arg == "--snapshot");
    let as_json = args.iter().any(|arg| arg == "--json");
    let with_thumbnail = args.iter().any(|arg| arg == "--thumbnail");
    let size = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .map(|arg| arg.parse::<SizeClass>())
        .transpose()?
        .unwrap_or_default();

    let provider = Provider;

    if snapshot {
        let entry = provider.snapshot();
        print!("{}", render(&entry.recipe, size));
        return Ok(());
    }

    let config = WidgetConfig::load().unwrap_or_else(|err| {
        warn!("failed to load configuration, using defaults: {err}");
        WidgetConfig::default()
    });
    let fetcher = RecipeFetcher::with_endpoint(
        &config.endpoint,
        Some(Duration::from_secs(config.timeout)),
    );

    let timeline = provider
        .timeline_with_interval(&fetcher, config.refresh_minutes as i64)
        .await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    for entry in &timeline.entries {
        print!("{}", render(&entry.recipe, size));
    }

    if with_thumbnail {
        let url = timeline.entries[0].recipe.thumbnail.clone();
        // Thumbnail::load blocks, keep it off the runtime threads
        let thumbnail = tokio::task::spawn_blocking(move || Thumbnail::load(&url)).await?;
        println!("Thumbnail: {} bytes", thumbnail.bytes().len());
    }

    println!("Next refresh after: {}", timeline.refresh_after.to_rfc3339());

    Ok(())
}
