use anyhow::{Result, bail};
use serde::Serialize;

use portal_application::PortalContext;
use portal_core::feature::{PROFILE_FEATURE_ID, TODO_FEATURE_ID};
use portal_core::record::{Page, Record, RecordFields};

pub async fn todos(ctx: &PortalContext, page: usize, per_page: usize, json: bool) -> Result<()> {
    ensure_visible(ctx, TODO_FEATURE_ID).await?;

    let mut store = ctx.todos().write().await;
    print_page(store.page(page, per_page), json, |todo| {
        let due = todo
            .fields
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "[{}] {}  due: {}  by {}",
            todo.status().label(),
            todo.fields.title,
            due,
            todo.updated_by
        )
    })
}

pub async fn profiles(ctx: &PortalContext, page: usize, per_page: usize, json: bool) -> Result<()> {
    ensure_visible(ctx, PROFILE_FEATURE_ID).await?;

    let mut store = ctx.profiles().write().await;
    print_page(store.page(page, per_page), json, |profile| {
        let fields = &profile.fields;
        format!(
            "[{}] {} ({}) {}  {}  {}",
            profile.status().label(),
            fields.full_name(),
            fields.gender.label(),
            fields.occupation,
            fields.email,
            fields.address.format()
        )
    })
}

async fn ensure_visible(ctx: &PortalContext, feature_id: &str) -> Result<()> {
    let visible = ctx
        .visible_features()
        .await
        .iter()
        .any(|feature| feature.id == feature_id);
    if !visible {
        bail!("'{}' is not available to the current session", feature_id);
    }
    Ok(())
}

fn print_page<F>(page: Page<'_, F>, json: bool, line: impl Fn(&Record<F>) -> String) -> Result<()>
where
    F: RecordFields + Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    let info = page.info;
    if info.total_items == 0 {
        println!("No records");
        return Ok(());
    }

    for record in &page.items {
        println!("{}", line(record));
    }
    println!(
        "-- {}-{} of {} (page {}/{})",
        info.start_item, info.end_item, info.total_items, info.current_page, info.total_pages
    );
    Ok(())
}
