use anyhow::Result;
use clap::ValueEnum;
use hashchain_core::Record;

const HEADERS: [&str; 4] = ["Transaction", "Nonce", "Previous Hash", "Hash"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

pub fn render(records: &[Record], format: Format) -> Result<String> {
    match format {
        Format::Table => Ok(render_table(records)),
        Format::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

/// Boxed table, one row per record, columns padded to the widest cell.
pub fn render_table(records: &[Record]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.transaction().to_string(),
                r.nonce().to_string(),
                r.previous_hash().to_string(),
                r.hash().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .fold(String::from("+"), |acc, w| acc + &"-".repeat(w + 2) + "+");

    let mut out = format!("{border}\n");
    push_row(&mut out, &HEADERS, &widths);
    out.push_str(&format!("{border}\n"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    if !rows.is_empty() {
        out.push_str(&format!("{border}\n"));
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 4]) {
    out.push('|');
    for (cell, w) in cells.iter().zip(widths) {
        out.push_str(&format!(" {:<w$} |", cell.as_ref(), w = *w));
    }
    out.push('\n');
}
