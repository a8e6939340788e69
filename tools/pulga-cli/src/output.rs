//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pulga_catalog::prelude::{NavButton, PageBlock, Product};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Human-readable lines are suppressed in JSON mode so stdout stays parseable.
    fn human(&self) -> bool {
        !self.json
    }

    pub fn info(&self, msg: &str) {
        if self.human() {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    pub fn success(&self, msg: &str) {
        if self.human() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.human() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are reported in both modes; JSON mode emits `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && self.human() {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if self.human() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// A URL on its own line. JSON mode prints `{"url": ...}`.
    pub fn link(&self, url: &str) {
        if self.json {
            println!("{}", serde_json::json!({ "url": url }));
        } else {
            println!("{} {}", style("→").cyan(), style(url).underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode output: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.human() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if self.human() {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if !self.human() {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", truncate(col, *width), width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a product table.
    pub fn products(&self, products: &[Product]) {
        const WIDTHS: [usize; 5] = [14, 36, 12, 16, 14];
        self.table_row(&["PRODUCT", "NAME", "PRICE", "CONDITION", "STOCK"], &WIDTHS);
        self.info(&"-".repeat(100));
        for p in products {
            let stock = p.stock_label().unwrap_or_default();
            self.table_row(
                &[
                    p.product_id.as_str(),
                    p.display_name(),
                    &p.price_display(),
                    &p.condition.label(),
                    &stock,
                ],
                &WIDTHS,
            );
        }
    }

    /// Print the page buttons line, e.g. `« ‹ [21] 22 … 30 › »`.
    pub fn page_block(&self, block: &PageBlock) {
        if !self.human() {
            return;
        }
        let button = |label: &str, nav: NavButton| {
            if nav.enabled {
                format!("{}", style(label).bold())
            } else {
                format!("{}", style(label).dim())
            }
        };
        let pages: Vec<String> = block
            .pages()
            .map(|p| {
                if p == block.current() {
                    format!("{}", style(format!("[{}]", p)).green().bold())
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!(
            "  {} {} {} {} {} {} {}",
            button("«", block.first()),
            button("‹‹", block.previous_block()),
            button("‹", block.previous()),
            pages.join(" "),
            button("›", block.next()),
            button("››", block.next_block()),
            button("»", block.last()),
        );
    }

    /// Spinner for a single request; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if !self.human() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Cut `s` to `width` characters, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("lamp", 10), "lamp");
        assert_eq!(truncate("lámpara de mesa", 8), "lámpara…");
        assert_eq!(truncate("abc", 0), "…");
    }
}
