use chrono::{Local, Utc};
use serde::Serialize;
use tc_core::entities::{OpportunityListItem, OpportunityStats};
use tc_core::enums::{DraftFilter, IntentTier, SortOrder, StatusFilter};
use tc_core::format::{scheduled_label, time_ago, truncate};
use tc_core::labels::intent_tier_short_label;
use tc_review::{FilterKey, QueryParams, ReviewQueue};

use crate::cli::root_commands::QueueArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{parse_control, parse_enum};
use crate::context::AppContext;
use crate::output::output;

const TITLE_WIDTH: usize = 60;

pub async fn handle(args: &QueueArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = build_params(args)?;
    tracing::debug!(query = %params, "loading queue");
    ctx.workspace.open(params).await?;
    render(ctx.workspace.queue(), flags)
}

/// Start from `--query` and fold each flag in the way the filter bar does:
/// a filter change resets the page, so `--page` is applied last.
pub fn build_params(args: &QueueArgs) -> anyhow::Result<QueryParams> {
    let mut params = args
        .query
        .as_deref()
        .map(QueryParams::parse)
        .unwrap_or_default();

    if let Some(raw) = args.status.as_deref() {
        let status = parse_control::<StatusFilter>(raw)?;
        let value = (status != StatusFilter::All).then(|| status.as_str());
        params = params.with_filter(FilterKey::Status, value);
    }
    if let Some(raw) = args.subreddits.as_deref() {
        let names = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        params = params.with_filter(FilterKey::Subreddits, Some(&names));
    }
    if let Some(raw) = args.intent_tier.as_deref() {
        let tier = if raw.trim() == "all" {
            None
        } else {
            Some(parse_enum::<IntentTier>(raw, "intent tier")?)
        };
        params = params.with_filter(FilterKey::IntentTier, tier.map(IntentTier::as_str));
    }
    if let Some(raw) = args.has_drafts.as_deref() {
        let filter = parse_control::<DraftFilter>(raw)?;
        params = params.with_filter(FilterKey::HasDrafts, filter.as_param());
    }
    if let Some(raw) = args.sort.as_deref() {
        let sort = parse_control::<SortOrder>(raw)?;
        params = params.with_filter(FilterKey::Sort, Some(sort.as_str()));
    }
    if let Some(page) = args.page {
        if page == 0 {
            anyhow::bail!("--page starts at 1");
        }
        params = params.with_page_index(page - 1);
    }
    Ok(params)
}

#[derive(Debug, Serialize)]
struct QueueRow {
    id: String,
    subreddit: String,
    title: String,
    status: String,
    read: bool,
    drafts: bool,
    tier: String,
    age: String,
    scheduled: String,
}

impl QueueRow {
    fn from_item(item: &OpportunityListItem) -> Self {
        Self {
            id: item.id.clone(),
            subreddit: format!("r/{}", item.subreddit_name),
            title: truncate(&item.post_title, TITLE_WIDTH),
            status: item.status.as_str().to_string(),
            read: item.is_read,
            drafts: item.has_drafts,
            tier: item
                .intent_tier
                .map_or_else(|| String::from("-"), |tier| intent_tier_short_label(tier).to_string()),
            age: time_ago(item.age_hours),
            scheduled: item
                .scheduled_for
                .map_or_else(|| String::from("-"), |at| scheduled_label(at, Utc::now(), &Local)),
        }
    }
}

#[derive(Debug, Serialize)]
struct QueueView<'a> {
    query: String,
    page: u32,
    page_count: u64,
    total_count: u64,
    items: &'a [OpportunityListItem],
    stats: Option<&'a OpportunityStats>,
}

fn page_count(total: u64, page_size: u32) -> u64 {
    total.div_ceil(u64::from(page_size.max(1)))
}

fn render(queue: &ReviewQueue, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pages = page_count(queue.total_count(), queue.page_size());
    match flags.format {
        OutputFormat::Table => {
            let rows = queue.items().iter().map(QueueRow::from_item).collect::<Vec<_>>();
            output(&rows, flags.format)?;
            if !flags.quiet {
                println!(
                    "page {} of {} ({} total)",
                    queue.query().page,
                    pages.max(1),
                    queue.total_count()
                );
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(
            &QueueView {
                query: queue.params().to_string(),
                page: queue.query().page,
                page_count: pages,
                total_count: queue.total_count(),
                items: queue.items(),
                stats: queue.stats(),
            },
            flags.format,
        ),
    }
}
