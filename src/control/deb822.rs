//! deb822 paragraph reader and writer
//!
//! Paragraph and field splitting is done by `rfc822-like`. Before that:
//! - `#` comment lines are dropped
//! - whitespace-only lines become paragraph separators
//!
//! Continuation lines are stored with their leading whitespace, joined by `\n`.

use crate::domain::{Field, Paragraph};
use crate::error::ControlError;
use indexmap::IndexMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Drops comments and collapses separator runs into single blank lines
fn prepare(content: &str) -> String {
    let mut prepared = String::with_capacity(content.len());
    let mut pending_break = false;

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        if line.trim().is_empty() {
            pending_break = !prepared.is_empty();
            continue;
        }
        if pending_break {
            prepared.push('\n');
            pending_break = false;
        }
        prepared.push_str(line.trim_end());
        prepared.push('\n');
    }

    prepared
}

/// Gives every continuation line leading whitespace so it renders as folded
fn fold_value(value: &str) -> String {
    let mut lines = value.split('\n');
    let mut folded = lines.next().unwrap_or_default().trim().to_string();
    for line in lines {
        folded.push('\n');
        if !(line.starts_with(' ') || line.starts_with('\t')) {
            folded.push(' ');
        }
        folded.push_str(line.trim_end());
    }
    folded
}

/// Parses control file content into paragraphs
pub fn parse_paragraphs(content: &str) -> Result<Vec<Paragraph>, ControlError> {
    let prepared = prepare(content);
    if prepared.is_empty() {
        return Err(ControlError::Empty);
    }

    let records: Vec<IndexMap<String, String>> =
        rfc822_like::from_str(&prepared).map_err(|e| ControlError::parse_error(e.to_string()))?;

    let paragraphs: Vec<Paragraph> = records
        .into_iter()
        .filter(|record| !record.is_empty())
        .map(|record| {
            record
                .into_iter()
                .map(|(name, value)| Field::new(name.trim(), fold_value(&value)))
                .collect()
        })
        .collect();

    if paragraphs.is_empty() {
        return Err(ControlError::Empty);
    }

    Ok(paragraphs)
}

/// Reads and parses a control file
pub fn read_control(path: &Path) -> Result<Vec<Paragraph>, ControlError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ControlError::not_found(path)
        } else {
            ControlError::read_error(path, e)
        }
    })?;
    parse_paragraphs(&content)
}

/// Formats one field as it appears in a control file
pub fn format_field(field: &Field) -> String {
    if field.value.is_empty() || field.value.starts_with('\n') {
        format!("{}:{}", field.name, field.value)
    } else {
        format!("{}: {}", field.name, field.value)
    }
}

/// Writes one paragraph, one line per field
pub fn write_paragraph(paragraph: &Paragraph, writer: &mut dyn Write) -> io::Result<()> {
    for field in paragraph.fields() {
        writeln!(writer, "{}", format_field(field))?;
    }
    Ok(())
}

/// Writes paragraphs separated by single blank lines
pub fn write_paragraphs(paragraphs: &[Paragraph], writer: &mut dyn Write) -> io::Result<()> {
    for (index, paragraph) in paragraphs.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        write_paragraph(paragraph, writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(paragraphs: &[Paragraph]) -> String {
        let mut output = Vec::new();
        write_paragraphs(paragraphs, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_two_paragraphs() {
        let content = "Source: libfoo1.0\nSection: libs\n\nPackage: libfoo1.0-dev\nArchitecture: any\n";
        let paragraphs = parse_paragraphs(content).unwrap();

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].get("Source"), Some("libfoo1.0"));
        assert_eq!(paragraphs[0].get("Section"), Some("libs"));
        assert_eq!(paragraphs[1].get("Package"), Some("libfoo1.0-dev"));
    }

    #[test]
    fn test_parse_multiple_blank_lines_and_whitespace_separators() {
        let content = "\n\nSource: a\n  \t\n\n\nPackage: b\n\n";
        let paragraphs = parse_paragraphs(content).unwrap();
        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn test_parse_continuation_lines() {
        let content = "Package: libfoo\nDescription: short\n long text\n .\n more\nSection: libs\n";
        let paragraphs = parse_paragraphs(content).unwrap();

        assert_eq!(
            paragraphs[0].get("Description"),
            Some("short\n long text\n .\n more")
        );
        assert_eq!(paragraphs[0].get("Section"), Some("libs"));
    }

    #[test]
    fn test_parse_value_starting_on_next_line() {
        let content = "Package: libfoo\nDepends:\n libc6,\n libbar1.0\nSection: libs\n";
        let paragraphs = parse_paragraphs(content).unwrap();

        let depends = paragraphs[0].get("Depends").unwrap();
        assert!(depends.contains("libc6,\n libbar1.0"));
        assert_eq!(paragraphs[0].get("Section"), Some("libs"));

        // Rendering is stable once parsed
        let once = render(&paragraphs);
        assert!(once.contains("\n libbar1.0\n"));
        assert_eq!(render(&parse_paragraphs(&once).unwrap()), once);
    }

    #[test]
    fn test_parse_drops_comments() {
        let content = "# generated\nSource: foo\n# note\nSection: libs\n";
        let paragraphs = parse_paragraphs(content).unwrap();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].len(), 2);
    }

    #[test]
    fn test_parse_crlf() {
        let content = "Source: foo\r\n\r\nPackage: bar\r\n";
        let paragraphs = parse_paragraphs(content).unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].get("Package"), Some("bar"));
    }

    #[test]
    fn test_parse_malformed_line() {
        let err = parse_paragraphs("Source: foo\nnot a field\n").unwrap_err();
        assert!(matches!(err, ControlError::ParseError { .. }));
    }

    #[test]
    fn test_prepare_collapses_separators() {
        assert_eq!(
            prepare("\n# c\nSource: a  \n \t\n\n# c\n\nPackage: b\n\n"),
            "Source: a\n\nPackage: b\n"
        );
        assert_eq!(prepare("# only\n\n"), "");
    }

    #[test]
    fn test_fold_value() {
        assert_eq!(fold_value("short"), "short");
        assert_eq!(fold_value("short\n long\n ."), "short\n long\n .");
        assert_eq!(fold_value("short\nlong\n."), "short\n long\n .");
        assert_eq!(fold_value("a\n\tb"), "a\n\tb");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_paragraphs(""), Err(ControlError::Empty)));
        assert!(matches!(
            parse_paragraphs("# only a comment\n\n"),
            Err(ControlError::Empty)
        ));
    }

    #[test]
    fn test_format_field() {
        assert_eq!(format_field(&Field::new("Package", "foo")), "Package: foo");
        assert_eq!(
            format_field(&Field::new("Depends", "\n a,\n b")),
            "Depends:\n a,\n b"
        );
        assert_eq!(format_field(&Field::new("Empty", "")), "Empty:");
    }

    #[test]
    fn test_write_paragraphs_round_trip() {
        let content = "Source: libfoo1.0\nBuild-Depends: debhelper (>= 10)\n\nPackage: libfoo1.0\nDescription: foo\n library\n .\n details\n\nPackage: libfoo1.0-dev\nDepends: libfoo1.0,\n libc6\n";
        let paragraphs = parse_paragraphs(content).unwrap();
        assert_eq!(render(&paragraphs), content);
    }

    #[test]
    fn test_read_control() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("control");
        fs::write(&path, "Source: foo\n").unwrap();

        let paragraphs = read_control(&path).unwrap();
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn test_read_control_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_control(&temp_dir.path().join("control")).unwrap_err();
        assert!(matches!(err, ControlError::NotFound { .. }));
    }
}
