use std::io::{self, Stdout, Write};

/// A trait, necessary for every entity that will receive the report lines.
pub trait ReportWriter {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Allows Stdout to print the report as is.
impl ReportWriter for Stdout {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{}", line)
    }
}
