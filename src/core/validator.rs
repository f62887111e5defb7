use super::models::PostRecord;

/// SEO meta fields every post is expected to carry, in report order.
pub const REQUIRED_META_KEYS: [&str; 6] = [
    "seo_title",
    "meta_description",
    "focus_keyword",
    "custom_slug",
    "_yoast_wpseo_title",
    "_yoast_wpseo_metadesc",
];

const MIN_TITLE_CHARS: usize = 5;
const MIN_CONTENT_CHARS: usize = 20;
const MIN_EXCERPT_CHARS: usize = 10;

/// Outcome of the per-post checks that also feeds the batch-wide counters.
#[derive(Debug)]
pub struct PostFindings {
    pub issues: Vec<String>,
    pub missing_featured: bool,
    pub missing_meta_keys: Vec<&'static str>,
}

/// Run every check against one post.
///
/// Checks are independent: all of them run even when earlier ones fail, and
/// the issue strings come out in check order.
pub fn check_post(post: &PostRecord) -> PostFindings {
    let mut issues = Vec::new();

    if trimmed_len(post.title()) < MIN_TITLE_CHARS {
        issues.push("Title is missing or too short.".to_string());
    }
    if post.slug().is_empty() {
        issues.push("Slug (post_name) is missing.".to_string());
    }
    if trimmed_len(post.content()) < MIN_CONTENT_CHARS {
        issues.push("Content is missing or too short.".to_string());
    }
    if trimmed_len(post.excerpt()) < MIN_EXCERPT_CHARS {
        issues.push("Excerpt is missing or too short.".to_string());
    }

    let missing_featured = !post.has_featured_image();
    if missing_featured {
        issues.push("Missing featured image.".to_string());
    }

    let mut missing_meta_keys = Vec::new();
    for key in REQUIRED_META_KEYS {
        if !post.has_meta(key) {
            issues.push(format!("Missing important meta field: {}", key));
            missing_meta_keys.push(key);
        }
    }

    PostFindings {
        issues,
        missing_featured,
        missing_meta_keys,
    }
}

/// Lowercased, whitespace-trimmed form used for duplicate detection.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

// Thresholds count characters, not bytes.
fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
