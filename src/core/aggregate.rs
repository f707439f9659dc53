use crate::core::validator::validate_line;
use crate::domain::model::Statistics;
use std::io::{self, BufRead};

/// Line iterator over raw bytes. `\n`, `\r\n` and a lone `\r` all end a line;
/// text is decoded lossily, so a stray invalid byte becomes U+FFFD instead of
/// aborting the run.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    skip_lf: bool,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    // Swallows the `\n` of a `\r\n` pair split across two reads.
    fn skip_pending_lf(&mut self) -> io::Result<()> {
        if self.skip_lf {
            self.skip_lf = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.skip_pending_lf() {
            return Some(Err(e));
        }

        self.buf.clear();
        let mut read_any = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };
            if available.is_empty() {
                break;
            }
            read_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = available[pos];
                    self.buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    self.skip_lf = terminator == b'\r';
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if !read_any {
            return None;
        }
        Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// Folds one line into `stats`. Line numbers start at 1.
pub fn fold_line(mut stats: Statistics, line_number: usize, line: &str, delimiter: &str) -> Statistics {
    stats.increment_total();
    match validate_line(line, line_number, delimiter) {
        Ok(record) => stats.add_valid_record(record.value),
        Err(error) => {
            tracing::debug!("Rejected {}", error);
            stats.add_error(error);
        }
    }
    stats
}

/// Runs every line through the validator in order. Stops at the first read error.
pub fn aggregate_lines<I>(lines: I, delimiter: &str) -> io::Result<Statistics>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    lines
        .into_iter()
        .enumerate()
        .try_fold(Statistics::new(), |stats, (index, line)| {
            Ok(fold_line(stats, index + 1, &line?, delimiter))
        })
}

pub fn aggregate_reader<R: BufRead>(reader: R, delimiter: &str) -> io::Result<Statistics> {
    aggregate_lines(LossyLines::new(reader), delimiter)
}
