use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the review queue.
    Queue(QueueArgs),
    /// Show queue counters.
    Stats,
    /// Show one opportunity with its drafts.
    Show { id: String },
    /// Open an opportunity (marks it read) and show it.
    Open { id: String },
    /// Approve a draft, optionally scheduling the post.
    Approve(ApproveArgs),
    /// Reject an opportunity with structured feedback.
    Reject(RejectArgs),
    /// Generate another draft.
    Regenerate(RegenerateArgs),
    /// Apply an action to several opportunities on one queue page.
    Bulk(BulkArgs),
    /// List rejection reasons.
    Reasons,
}

/// Queue filters. Each flag merges into `--query` and resets the page
/// unless `--page` is given.
#[derive(Clone, Debug, Default, Args)]
pub struct QueueArgs {
    /// all, unread, or a status such as pending_approval
    #[arg(long)]
    pub status: Option<String>,
    /// Comma-separated subreddit names
    #[arg(long)]
    pub subreddits: Option<String>,
    /// tier_1 .. tier_4
    #[arg(long)]
    pub intent_tier: Option<String>,
    /// true or false
    #[arg(long)]
    pub has_drafts: Option<String>,
    /// time, -time, relevance, score, subreddit, -subreddit
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,
    /// 1-based page number
    #[arg(long)]
    pub page: Option<u32>,
    /// Raw query string to start from, e.g. "status=approved&page=2"
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ApproveArgs {
    pub id: String,
    /// Draft to approve (defaults to the selected or first draft)
    #[arg(long)]
    pub draft: Option<i64>,
    /// Replacement reply text
    #[arg(long)]
    pub text: Option<String>,
    /// Post date, YYYY-MM-DD (local time)
    #[arg(long)]
    pub date: Option<String>,
    /// Post time, HH:MM (local time)
    #[arg(long)]
    pub time: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RejectArgs {
    pub id: String,
    #[arg(long)]
    pub reason: String,
    /// 1 (not sure) to 5 (very confident)
    #[arg(long, default_value_t = 3)]
    pub confidence: u8,
    #[arg(long)]
    pub explanation: Option<String>,
    #[arg(long)]
    pub suggestion: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RegenerateArgs {
    pub id: String,
    /// engage_only, soft_mention, with_link
    #[arg(long)]
    pub strategy: Option<String>,
    #[arg(long)]
    pub tone: Option<String>,
    /// Leave the tracked link out (with_link only)
    #[arg(long)]
    pub no_utm: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BulkAction {
    Read,
    Reject,
    Restore,
    Generate,
    Approve,
}

#[derive(Clone, Debug, Args)]
pub struct BulkArgs {
    pub action: BulkAction,
    /// Opportunities to select; they must be on the loaded page
    #[arg(required = true)]
    pub ids: Vec<String>,
    #[command(flatten)]
    pub queue: QueueArgs,
    /// Draft choice for `approve`, as ID=DRAFT (default: first draft)
    #[arg(long = "pick", value_name = "ID=DRAFT")]
    pub picks: Vec<String>,
}
