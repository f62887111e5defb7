use crate::core::state::ReviewSummary;

/// Render the review summary as a Markdown report.
///
/// The format is fixed: the same summary always yields the same bytes.
/// Percentages carry exactly one digit after the decimal point; `finish()`
/// guarantees `total > 0` before this runs.
pub fn render(summary: &ReviewSummary) -> String {
    let total = summary.total as f64;

    let mut lines = vec![
        format!("Total posts reviewed: {}", summary.total),
        format!(
            "Posts missing featured images: {} ({:.1}%)",
            summary.missing_featured,
            summary.missing_featured as f64 / total * 100.0
        ),
    ];
    for (key, count) in &summary.missing_meta {
        lines.push(format!(
            "Posts missing meta '{}': {} ({:.1}%)",
            key,
            count,
            *count as f64 / total * 100.0
        ));
    }
    if !summary.duplicates.is_empty() {
        lines.push(format!("Duplicates found:\n{}", summary.duplicates.join("\n")));
    }

    let mut report = String::new();
    report.push_str("# AI Review Results\n\n");
    report.push_str("## Summary\n");
    report.push_str(&lines.join("\n"));
    report.push_str("\n\n");

    if summary.entries.is_empty() {
        report.push_str("No issues found. Your content is in great shape!\n");
    } else {
        report.push_str("## Per-Post Issues\n");
        for entry in &summary.entries {
            report.push_str(&format!(
                "- **[{}]({}) (ID: {})**\n",
                entry.title, entry.permalink, entry.id
            ));
            for issue in &entry.issues {
                report.push_str(&format!("  - {}\n", issue));
            }
        }
    }

    report
}
