use super::counter::OrderedCounter;
use super::errors::ReviewError;
use super::models::{IssueEntry, PostRecord};
use super::validator;

/// Accumulators for one review pass.
///
/// Every invocation owns a fresh instance; nothing here is shared across
/// concurrent requests.
#[derive(Debug, Default)]
pub struct ReviewState {
    total: usize,
    title_counts: OrderedCounter,
    slug_counts: OrderedCounter,
    missing_featured: usize,
    missing_meta: OrderedCounter,
    entries: Vec<IssueEntry>,
}

impl ReviewState {
    /// Run the whole pipeline: one pass over the posts, then fold the
    /// counters into renderable summary data.
    pub fn review(posts: &[PostRecord]) -> Result<ReviewSummary, ReviewError> {
        let mut state = ReviewState::default();
        for post in posts {
            state.observe(post);
        }
        state.finish()
    }

    /// Feed one post into the counters, recording its issues if any.
    ///
    /// Title and slug frequencies are counted for every post, clean ones
    /// included.
    pub fn observe(&mut self, post: &PostRecord) {
        self.total += 1;
        self.title_counts.increment(&validator::normalize(post.title()));
        self.slug_counts.increment(&validator::normalize(post.slug()));

        let findings = validator::check_post(post);
        if findings.missing_featured {
            self.missing_featured += 1;
        }
        for key in &findings.missing_meta_keys {
            self.missing_meta.increment(key);
        }

        if !findings.issues.is_empty() {
            tracing::debug!(
                "Post {}: {} issues",
                post.id_label(),
                findings.issues.len()
            );
            self.entries.push(IssueEntry {
                id: post.id_label(),
                title: post.title().to_string(),
                permalink: post.permalink().to_string(),
                issues: findings.issues,
            });
        }
    }

    /// Close out the pass. An empty batch is a hard error: the percentage
    /// lines are undefined for zero posts.
    pub fn finish(self) -> Result<ReviewSummary, ReviewError> {
        if self.total == 0 {
            return Err(ReviewError::EmptyBatch);
        }

        let mut duplicates = Vec::new();
        for (field, counts) in [("title", &self.title_counts), ("slug", &self.slug_counts)] {
            for (value, count) in counts.iter() {
                if !value.is_empty() && count > 1 {
                    duplicates.push(format!("Duplicate {}: {} ({} times)", field, value, count));
                }
            }
        }

        Ok(ReviewSummary {
            total: self.total,
            missing_featured: self.missing_featured,
            missing_meta: self
                .missing_meta
                .iter()
                .map(|(key, count)| (key.to_string(), count))
                .collect(),
            duplicates,
            entries: self.entries,
        })
    }
}

/// Everything the report renderer needs, fully computed.
#[derive(Debug)]
pub struct ReviewSummary {
    pub total: usize,
    pub missing_featured: usize,
    /// Per-key miss counts, ordered by first failure encountered.
    pub missing_meta: Vec<(String, usize)>,
    /// Pre-formatted duplicate lines: titles first, then slugs.
    pub duplicates: Vec<String>,
    /// Posts with at least one issue, in input order.
    pub entries: Vec<IssueEntry>,
}

impl ReviewSummary {
    pub fn posts_with_issues(&self) -> usize {
        self.entries.len()
    }
}
