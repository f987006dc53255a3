//! dig-style report rendering.
//!
//! The whole report is assembled in memory and handed to the writer in
//! a single call; when every section is empty nothing is written at
//! all. Only the writer's own error can make rendering fail.

use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Renders the question pseudo-section and the three record sections.
///
/// A section header appears only when that section is non-empty, and
/// every printed section block ends with one blank line. Questions
/// render as `;name class type`; records in hickory's zone-file form.
pub fn render(
    w: &mut impl Write,
    question: &[Query],
    answer: &[Record],
    authority: &[Record],
    additional: &[Record],
) -> io::Result<()> {
    let mut report = String::new();

    if !question.is_empty() {
        report.push_str(";; QUESTION PSEUDOSECTION:\n");
        for q in question {
            let _ = writeln!(
                report,
                ";{}\t{}\t{}",
                q.name(),
                q.query_class(),
                q.query_type()
            );
        }
        report.push('\n');
    }

    render_section(&mut report, ";; ANSWER SECTION:", answer);
    render_section(&mut report, ";; AUTHORITY SECTION:", authority);
    render_section(&mut report, ";; ADDITIONAL SECTION:", additional);

    if report.is_empty() {
        return Ok(());
    }
    w.write_all(report.as_bytes())
}

fn render_section(report: &mut String, header: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }

    report.push_str(header);
    report.push('\n');
    for record in records {
        let _ = writeln!(report, "{record}");
    }
    report.push('\n');
}
