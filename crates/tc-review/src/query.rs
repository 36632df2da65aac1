//! Navigable query state for the review queue.
//!
//! The query string is the single source of truth for what the queue shows.
//! Controls never reload directly: they produce a new [`QueryParams`] via
//! [`QueryParams::with_filter`] or [`QueryParams::with_page_index`], and the
//! workspace reloads from whatever params it is handed.

use std::collections::BTreeMap;
use std::fmt;

use tc_client::payloads::ListFilters;
use tc_core::enums::{DraftFilter, IntentTier, SortOrder, StatusFilter};

const PAGE_KEY: &str = "page";

/// Query keys that act as list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Status,
    Subreddits,
    IntentTier,
    HasDrafts,
    Sort,
}

impl FilterKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Subreddits => "subreddits",
            Self::IntentTier => "intent_tier",
            Self::HasDrafts => "has_drafts",
            Self::Sort => "sort",
        }
    }
}

// ── Raw params ─────────────────────────────────────────────────────

/// Decoded `key=value` pairs from the queue URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Parse `status=approved&page=2` (a leading `?` is allowed). Empty
    /// values are dropped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut params = BTreeMap::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (key, value) = (decode(key), decode(value));
            if !key.is_empty() && !value.is_empty() {
                params.insert(key, value);
            }
        }
        Self(params)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge one filter change into the current params.
    ///
    /// `None` (or an empty value) removes the key. Every other key is kept,
    /// and `page` always goes back to 1.
    #[must_use]
    pub fn with_filter(&self, key: FilterKey, value: Option<&str>) -> Self {
        let mut params = self.0.clone();
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => {
                params.insert(key.as_str().to_string(), value.to_string());
            }
            None => {
                params.remove(key.as_str());
            }
        }
        params.insert(PAGE_KEY.to_string(), "1".to_string());
        Self(params)
    }

    /// Move to a 0-based page index; only `page` changes.
    #[must_use]
    pub fn with_page_index(&self, index: u32) -> Self {
        let mut params = self.0.clone();
        params.insert(PAGE_KEY.to_string(), index.saturating_add(1).to_string());
        Self(params)
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                f.write_str("&")?;
            }
            first = false;
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), |decoded| decoded.into_owned())
}

// ── Typed view ─────────────────────────────────────────────────────

/// The queue controls as read from [`QueryParams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub status: StatusFilter,
    pub subreddits: Vec<String>,
    pub intent_tier: Option<IntentTier>,
    pub has_drafts: DraftFilter,
    pub sort: SortOrder,
    /// 1-based.
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            subreddits: Vec::new(),
            intent_tier: None,
            has_drafts: DraftFilter::All,
            sort: SortOrder::Newest,
            page: 1,
        }
    }
}

impl ListQuery {
    /// Read the controls from params. Unknown values fall back to the
    /// control's default; a missing, unparsable, or zero page becomes 1.
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        let status = parse_or_default(params, FilterKey::Status.as_str());
        let sort = parse_or_default(params, FilterKey::Sort.as_str());
        let has_drafts = parse_or_default(params, FilterKey::HasDrafts.as_str());
        let intent_tier = params
            .get(FilterKey::IntentTier.as_str())
            .and_then(|raw| match raw.parse::<IntentTier>() {
                Ok(tier) => Some(tier),
                Err(error) => {
                    tracing::warn!(%error, "ignoring intent tier filter");
                    None
                }
            });
        let subreddits = params
            .get(FilterKey::Subreddits.as_str())
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let page = params
            .get(PAGE_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1);

        Self {
            status,
            subreddits,
            intent_tier,
            has_drafts,
            sort,
            page,
        }
    }

    /// 0-based page index for pagination controls.
    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// Filters for `GET /opportunities/`.
    #[must_use]
    pub fn to_filters(&self, page_size: u32) -> ListFilters {
        let (status, is_read) = match self.status {
            StatusFilter::All => (None, None),
            StatusFilter::Unread => (None, Some(false)),
            StatusFilter::Status(status) => (Some(status), None),
        };
        ListFilters {
            status,
            is_read,
            subreddits: self.subreddits.clone(),
            intent_tier: self.intent_tier,
            has_drafts: self.has_drafts.has_drafts(),
            sort: Some(self.sort),
            page: Some(self.page),
            page_size: Some(page_size),
        }
    }
}

fn parse_or_default<T>(params: &QueryParams, key: &str) -> T
where
    T: std::str::FromStr + Default,
    T::Err: fmt::Display,
{
    params.get(key).map_or_else(T::default, |raw| {
        raw.parse().unwrap_or_else(|error| {
            tracing::warn!(key, %error, "falling back to default");
            T::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tc_core::enums::OpportunityStatus;

    #[test]
    fn parse_decodes_and_drops_empty_values() {
        let params = QueryParams::parse("?status=pending_review&subreddits=a%2Cb&sort=&q=two+words");
        assert_eq!(params.get("status"), Some("pending_review"));
        assert_eq!(params.get("subreddits"), Some("a,b"));
        assert_eq!(params.get("sort"), None);
        assert_eq!(params.get("q"), Some("two words"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let params = QueryParams::parse("subreddits=home%20lab,selfhosted&page=3");
        assert_eq!(QueryParams::parse(&params.to_string()), params);
    }

    #[test]
    fn filter_changes_accumulate_and_reset_page() {
        let params = QueryParams::parse("page=4")
            .with_filter(FilterKey::Status, Some("approved"))
            .with_page_index(2)
            .with_filter(FilterKey::Sort, Some("-time"));

        assert_eq!(params.to_string(), "page=1&sort=-time&status=approved");
    }

    #[test]
    fn clearing_a_filter_removes_the_key() {
        let params = QueryParams::parse("status=approved&has_drafts=true&page=2")
            .with_filter(FilterKey::HasDrafts, None)
            .with_filter(FilterKey::IntentTier, Some(""));

        assert_eq!(params.to_string(), "page=1&status=approved");
    }

    #[test]
    fn page_change_touches_only_page() {
        let params = QueryParams::parse("status=posted&sort=score&page=1");
        let next = params.with_page_index(4);

        assert_eq!(next.get("page"), Some("5"));
        assert_eq!(next.get("status"), Some("posted"));
        assert_eq!(next.get("sort"), Some("score"));
    }

    #[test]
    fn empty_params_read_as_defaults() {
        assert_eq!(ListQuery::from_params(&QueryParams::default()), ListQuery::default());
    }

    #[rstest]
    #[case("page=0", 1)]
    #[case("page=abc", 1)]
    #[case("page=-2", 1)]
    #[case("page=7", 7)]
    fn page_parsing_falls_back_to_first(#[case] query: &str, #[case] expected: u32) {
        assert_eq!(ListQuery::from_params(&QueryParams::parse(query)).page, expected);
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let query = ListQuery::from_params(&QueryParams::parse(
            "status=archived&sort=newest&intent_tier=tier_9&has_drafts=maybe",
        ));
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn unread_maps_to_is_read_false() {
        let query = ListQuery::from_params(&QueryParams::parse("status=unread&has_drafts=false"));
        let filters = query.to_filters(20);
        assert_eq!(filters.status, None);
        assert_eq!(filters.is_read, Some(false));
        assert_eq!(filters.has_drafts, Some(false));
        assert_eq!(filters.sort, Some(SortOrder::Newest));
    }

    #[test]
    fn full_query_maps_to_filters() {
        let query = ListQuery::from_params(&QueryParams::parse(
            "status=pending_approval&subreddits=selfhosted,,homelab&intent_tier=tier_2&sort=relevance&page=3",
        ));
        assert_eq!(query.page_index(), 2);
        assert_eq!(
            query.to_filters(25),
            ListFilters {
                status: Some(OpportunityStatus::PendingApproval),
                is_read: None,
                subreddits: vec!["selfhosted".into(), "homelab".into()],
                intent_tier: Some(IntentTier::Tier2),
                has_drafts: None,
                sort: Some(SortOrder::Relevance),
                page: Some(3),
                page_size: Some(25),
            }
        );
    }
}
