use std::{cell::Cell, fmt::Display};

use crate::terminal::colors;
use colored::*;
use qnoise_common::log::PRINT_TARGET;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! qprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Pads `title` on both sides with `fill` up to [`TOTAL_WIDTH`] columns.
fn rule(fill: &str, title: &str) -> String {
    let free = TOTAL_WIDTH.saturating_sub(console::measure_text_width(title));
    let left = free / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        title,
        fill.repeat(free - left).color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ QNOISE v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&rule("═", &title.bright_green().bold().to_string()));
    centerln(&"non-Gaussian colored noise".italic().color(colors::TEXT_DEFAULT).to_string());
}

pub fn header(msg: &str, q_level: u8) {
    if q_level == 0 {
        let title = format!("⟦ {} ⟧", msg.to_uppercase());
        print(&rule("─", &title.bright_green().to_string()));
    }
}

pub fn fat_separator() {
    print(&rule("═", ""));
}

pub fn end_of_program(q_level: u8) {
    if q_level == 0 {
        fat_separator();
    }
}

pub fn centerln(msg: &str) {
    print(&rule(" ", msg));
}

/// Sets the key column width used by [`aligned_line`].
pub fn set_key_width<'a>(keys: impl IntoIterator<Item = &'a str>) {
    let width = keys.into_iter().map(str::len).max().unwrap_or(0);
    KEY_WIDTH.set(width);
}

fn dotted_key(key: &str, width: usize, key_color: Color) -> String {
    let dots = ".".repeat((width + 1).saturating_sub(key.len()));
    format!(
        "{}{}{}",
        key.color(key_color),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    )
}

pub fn aligned_line(key: &str, value: impl Display) {
    let key = dotted_key(key, KEY_WIDTH.get(), colors::PRIMARY);
    print_status(format!("{} {}", key, value.to_string().color(colors::VALUE)));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

/// Case index and label heading a block of details.
pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let width = details.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let last = details.len().saturating_sub(1);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        print(&format!(
            " {} {} {}",
            branch.color(colors::SEPARATOR),
            dotted_key(key, width, colors::TEXT_DEFAULT),
            value
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_fills_total_width() {
        colored::control::set_override(false);

        assert_eq!(rule("═", ""), "═".repeat(TOTAL_WIDTH));
        let line = rule("─", "⟦ Q-NOISE ⟧");
        assert_eq!(console::measure_text_width(&line), TOTAL_WIDTH);
        assert!(line.starts_with("─────"));
        assert!(line.ends_with("─────"));
    }

    #[test]
    fn test_dotted_key_aligns_colons() {
        colored::control::set_override(false);

        assert_eq!(dotted_key("q", 7, Color::White), "q.......:");
        assert_eq!(dotted_key("Samples", 7, Color::White), "Samples.:");
    }
}
