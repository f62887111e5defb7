use crate::core::state::ReviewSummary;
use colored::Colorize;

/// One-glance terminal summary, printed after the report file is written.
pub fn print_summary(summary: &ReviewSummary) {
    println!("\n{}", "Review complete".green().bold());

    println!("\n{}", "Results:".yellow().bold());
    println!(
        "  Posts reviewed: {}",
        summary.total.to_string().cyan().bold()
    );

    let with_issues = summary.posts_with_issues();
    if with_issues == 0 {
        println!("  Posts with issues: {}", "0".green().bold());
    } else {
        println!(
            "  Posts with issues: {}",
            with_issues.to_string().red().bold()
        );
    }

    if summary.missing_featured > 0 {
        println!(
            "  Missing featured images: {}",
            summary.missing_featured.to_string().red()
        );
    }

    if !summary.duplicates.is_empty() {
        println!("\n{}", "Duplicates:".yellow().bold());
        for line in &summary.duplicates {
            println!("  • {}", line);
        }
    }
}
