use std::fmt::Write;
use std::path::Path;

use folio_db::Database;
use folio_types::models::Message;
use folio_types::time;

pub const NO_DATABASE: &str =
    "\u{1f4ed} No database found. Run your portfolio first to create the database.";
pub const NO_MESSAGES: &str = "\u{1f4ed} No messages found in the database.";

const RULE_WIDTH: usize = 80;

/// Opens `path` read-only and renders the report. Every failure becomes a
/// printable line; nothing here panics or aborts.
pub fn run(path: &Path) -> String {
    if !path.exists() {
        return NO_DATABASE.to_string();
    }

    match Database::open_read_only(path).and_then(|db| db.list_messages()) {
        Ok(messages) => render(&messages),
        Err(e) => match e.downcast_ref::<rusqlite::Error>() {
            Some(db_err) => format!("\u{274c} Database error: {}", db_err),
            None => format!("\u{274c} Error: {}", e),
        },
    }
}

pub fn render(messages: &[Message]) -> String {
    if messages.is_empty() {
        return NO_MESSAGES.to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "\u{1f4ec} Found {} message(s):\n", messages.len());
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for (i, msg) in messages.iter().enumerate() {
        let _ = writeln!(out, "\n\u{1f4e7} Message #{}", i + 1);
        let _ = writeln!(out, "\u{1f464} From: {}", msg.name);
        let _ = writeln!(out, "\u{1f4e7} Email: {}", msg.email);
        let _ = writeln!(out, "\u{1f4c5} Date: {}", time::human(&msg.created_at));
        out.push_str("\u{1f4ac} Message:\n");
        for line in msg.message.lines() {
            let _ = writeln!(out, "   {}", line);
        }
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
    }

    out
}
