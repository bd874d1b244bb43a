use colored::Colorize;

use crate::quotes::{CategoryFilter, Quote, NO_QUOTES_MESSAGE};
use crate::sync::ReconcileReport;

/// Format a list of quotes as a pretty table
pub fn format_quotes_pretty(quotes: &[&Quote], filter: &CategoryFilter) -> String {
    let title = match filter {
        CategoryFilter::All => "All Quotes".to_string(),
        CategoryFilter::Category(c) => format!("Quotes in {c}"),
    };

    if quotes.is_empty() {
        return format!("{title} (0 items)\n  No items");
    }

    let mut output = format!("{} ({} items)\n", title, quotes.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for quote in quotes {
        output.push_str(&format!(
            "\"{}\"  {}\n",
            quote.text.bold(),
            quote.category.cyan()
        ));
    }

    output
}

/// Format the quote picked for display
pub fn format_shown_pretty(quote: Option<&Quote>) -> String {
    match quote {
        Some(quote) => format!("\"{}\"\n  {}", quote.text.bold(), quote.category.dimmed()),
        None => NO_QUOTES_MESSAGE.yellow().to_string(),
    }
}

/// Format the category list, marking the selected one
pub fn format_categories_pretty(categories: &[&str], selected: &CategoryFilter) -> String {
    let mut lines = Vec::with_capacity(categories.len() + 1);

    let marker = |active: bool| if active { "*".green().to_string() } else { " ".to_string() };

    lines.push(format!(
        "{} {}",
        marker(*selected == CategoryFilter::All),
        "All Categories".dimmed()
    ));
    for category in categories {
        let active = matches!(selected, CategoryFilter::Category(c) if c == category);
        lines.push(format!("{} {}", marker(active), category));
    }

    lines.join("\n")
}

/// Format a sync report
pub fn format_sync_pretty(report: &ReconcileReport) -> String {
    match report.notification() {
        Some(note) => {
            let mut output = format!(
                "{} {} new of {} fetched",
                note.green().bold(),
                report.added_count(),
                report.fetched
            );
            for quote in &report.added {
                output.push_str(&format!("\n  + {}", quote.text));
            }
            output
        }
        None => format!("Already up to date ({} fetched)", report.fetched)
            .dimmed()
            .to_string(),
    }
}
