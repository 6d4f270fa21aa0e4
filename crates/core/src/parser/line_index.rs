use stencil_ls_api::Position;

/// Byte offsets of every line start, for converting between editor
/// positions (line, UTF-16 column) and byte offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Clamps past-the-end lines to the end of the text and past-the-end
    /// columns to the end of the line.
    pub fn offset_at(&self, text: &str, position: Position) -> usize {
        let Some(&line_start) = self.line_starts.get(position.line as usize) else {
            return text.len();
        };

        let mut offset = line_start;
        let mut utf16_count = 0;
        for c in text[line_start..].chars() {
            if utf16_count >= position.character as usize || c == '\n' || c == '\r' {
                break;
            }
            utf16_count += c.len_utf16();
            offset += c.len_utf8();
        }
        offset
    }

    pub fn position_at(&self, text: &str, offset: usize) -> Position {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let character: usize = text[line_start..offset].chars().map(char::len_utf16).sum();
        Position::new(line as u32, character as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_simple_lines() {
        let text = "ab\ncd\n";
        let idx = LineIndex::new(text);
        assert_eq!(idx.line_count(), 3);
        assert_eq!(idx.offset_at(text, Position::new(1, 1)), 4);
        assert_eq!(idx.position_at(text, 4), Position::new(1, 1));
    }

    #[test]
    fn handles_crlf_and_clamping() {
        let text = "a\r\nbc";
        let idx = LineIndex::new(text);
        assert_eq!(idx.offset_at(text, Position::new(1, 0)), 3);
        assert_eq!(idx.offset_at(text, Position::new(0, 99)), 1);
        assert_eq!(idx.offset_at(text, Position::new(7, 0)), text.len());
        assert_eq!(idx.position_at(text, 4), Position::new(1, 1));
    }

    #[test]
    fn columns_are_utf16() {
        let text = "é😀x";
        let idx = LineIndex::new(text);
        // é = 1 unit / 2 bytes, 😀 = 2 units / 4 bytes
        assert_eq!(idx.offset_at(text, Position::new(0, 3)), 6);
        assert_eq!(idx.position_at(text, 6), Position::new(0, 3));
        assert_eq!(idx.position_at(text, 3), Position::new(0, 1));
    }
}
