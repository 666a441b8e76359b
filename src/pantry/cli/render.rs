use colored::Colorize;
use pantry::commands::{CmdMessage, CmdResult, MessageLevel};
use pantry::model::{Category, ItemName, Record};
use pantry::views;
use unicode_width::UnicodeWidthStr;

const GROUP_NAME_WIDTH: usize = 20;

/// Renders whichever view the result carries, followed by its messages.
/// Every line ends with a newline.
pub(super) fn render(result: &CmdResult) -> String {
    let mut out = if !result.rows.is_empty() {
        render_rows(&result.rows)
    } else if !result.grouped.is_empty() {
        render_grouped(&result.grouped)
    } else {
        render_records(&result.listed)
    };
    out.push_str(&render_messages(&result.messages));
    out
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn render_records(records: &[(ItemName, Record)]) -> String {
    views::plain_listing(records)
        .into_iter()
        .map(|line| format!("{}\n", line))
        .collect()
}

fn render_rows(rows: &[String]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("{}\n", row.bold()));
        } else {
            out.push_str(&format!("{}\n", row));
        }
    }
    out
}

fn render_grouped(grouped: &[(Category, Vec<(ItemName, u64)>)]) -> String {
    let mut out = String::new();
    for (category, items) in grouped {
        out.push_str(&format!("\n{}\n", format!("[{}]", category).bold()));
        if items.is_empty() {
            out.push_str(&format!("  {}\n", "(No items)".dimmed()));
            continue;
        }
        for (name, quantity) in items {
            out.push_str(&format!(
                "  {} Qty: {}\n",
                pad_to_width(name.as_str(), GROUP_NAME_WIDTH),
                quantity
            ));
        }
    }
    out
}

/// Left-aligns `s` in `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
