//! Tests for HEADER and COMMENTS section parsing

use super::header_line;
use crate::app::services::tydex_parser::comments::parse_comments_section;
use crate::app::services::tydex_parser::header::parse_header_section;

#[test]
fn test_header_key_trimmed_value_untrimmed() {
    let section = header_line("TESTID", "  RUN001  ");
    let headers = parse_header_section(&section);

    assert_eq!(headers.len(), 1);
    assert_eq!(headers["TESTID"], "  RUN001  ");
}

#[test]
fn test_header_value_starts_at_column_fifty() {
    let section = header_line("TESTID", "RUN001");
    let headers = parse_header_section(&section);

    assert_eq!(headers["TESTID"], "RUN001");
}

#[test]
fn test_header_short_lines_yield_empty_value() {
    let headers = parse_header_section("TESTID\n");

    assert_eq!(headers["TESTID"], "");
}

#[test]
fn test_header_skips_blank_lines_and_blank_keys() {
    let mut section = header_line("RELEASE", "1.3");
    section.push('\n');
    section.push_str(&format!("{:<50}{}\n", "", "orphan value"));
    let headers = parse_header_section(&section);

    assert_eq!(headers.len(), 1);
    assert!(headers.contains_key("RELEASE"));
}

#[test]
fn test_header_repeated_key_keeps_last_value() {
    let mut section = header_line("TESTID", "RUN001");
    section.push_str(&header_line("TESTID", "RUN002"));
    let headers = parse_header_section(&section);

    assert_eq!(headers["TESTID"], "RUN002");
}

#[test]
fn test_comments_preserve_order_and_blanks() {
    let section = "first line\n\nthird line\n";
    let comments = parse_comments_section(section);

    assert_eq!(comments, vec!["first line", "", "third line"]);
}

#[test]
fn test_comments_no_phantom_trailing_line() {
    assert_eq!(parse_comments_section("only\n"), vec!["only"]);
    assert!(parse_comments_section("").is_empty());
}
