use anyhow::Result;

use portal_application::PortalContext;
use portal_core::feature::all_features;

pub async fn list(ctx: &PortalContext, all: bool, json: bool) -> Result<()> {
    let features = if all {
        all_features(ctx.catalog())
    } else {
        ctx.visible_features().await
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&features)?);
        return Ok(());
    }

    if features.is_empty() {
        println!("No features available. Sign in first.");
        return Ok(());
    }

    for feature in features {
        let required = feature
            .required_role
            .map(|role| role.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} {:<10} {}  [{}] requires: {}{}",
            feature.icon,
            feature.id,
            feature.name,
            feature.url,
            required,
            if feature.is_active { "" } else { " (inactive)" }
        );
        if !feature.description.is_empty() {
            println!("    {}", feature.description);
        }
    }
    Ok(())
}
