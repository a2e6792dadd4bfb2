use std::io::Write;

use crate::error::Result;
use crate::maf::AnnotatedRecord;
use crate::pipeline::RunContext;

/// Writer stage: reproduces the comment block, then the output header, then
/// one line per record with values laid out in header order.
pub struct MafWriter<W: Write> {
    out: W,
}

impl<W: Write> MafWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Drain `records` into the output. Returns the number of records written.
    pub fn write<I>(&mut self, context: &RunContext, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = AnnotatedRecord>,
    {
        for comment in &context.comment_lines {
            writeln!(self.out, "{}", comment)?;
        }
        writeln!(self.out, "{}", context.header.to_line())?;

        let mut written = 0;
        for record in records {
            let row: Vec<&str> = context
                .header
                .iter()
                .map(|col| record.get(col).unwrap_or(""))
                .collect();
            writeln!(self.out, "{}", row.join("\t"))?;
            written += 1;
        }
        self.out.flush()?;
        Ok(written)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
