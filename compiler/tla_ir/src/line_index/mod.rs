//! Conversion between byte offsets and 1-based line/column positions.

/// Line start offsets of one source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .filter_map(|(i, _)| u32::try_from(i + 1).ok()),
        );
        LineIndex {
            line_starts,
            len: u32::try_from(text.len()).unwrap_or(u32::MAX),
        }
    }

    /// Byte offset of a 1-based `line:column`; `None` when out of range.
    ///
    /// Columns count bytes, which is exact for TLA+ identifiers.
    pub fn offset(&self, line: u32, column: u32) -> Option<u32> {
        let line_idx = usize::try_from(line.checked_sub(1)?).ok()?;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map_or(self.len, |&next| next - 1);
        let offset = start.checked_add(column.checked_sub(1)?)?;
        (offset <= end).then_some(offset)
    }

    /// 1-based `(line, column)` of a byte offset.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = offset.min(self.len);
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = u32::try_from(line_idx + 1).unwrap_or(u32::MAX);
        (line, offset - self.line_starts[line_idx] + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
