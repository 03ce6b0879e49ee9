//! Output formatting for the CLI.

use std::io::IsTerminal;

use console::{style, Term};
use rewear_commerce::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Whether machine-readable output was requested.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Whether stdin and stdout are both attached to a terminal.
    pub fn is_interactive(&self) -> bool {
        !self.json && self.term.is_term() && std::io::stdin().is_terminal()
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize output"),
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print one product as a listing row.
    pub fn product_row(&self, product: &Product) {
        if self.json {
            return;
        }
        let id = format!("#{}", product.id);
        let price = product.price.display();
        let rating = format!("★ {:.1}", product.rating);
        let badge = if product.is_new { "NEW" } else { "" };
        self.table_row(
            &[
                id.as_str(),
                product.name.as_str(),
                price.as_str(),
                rating.as_str(),
                product.category.display_name(),
                badge,
            ],
            &PRODUCT_COLUMNS,
        );
    }

    /// Print the column headings for [`Output::product_row`].
    pub fn product_heading(&self) {
        if self.json {
            return;
        }
        let cols = ["ID", "NAME", "PRICE", "RATING", "CATEGORY", ""];
        let heading: Vec<String> = cols
            .iter()
            .zip(PRODUCT_COLUMNS.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", style(heading.join("  ").trim_end()).dim());
    }
}

const PRODUCT_COLUMNS: [usize; 6] = [4, 34, 10, 6, 12, 3];
