//! Text codec for address book files
//!
//! ```text
//! record    := name field-sep email record-sep
//! field-sep := ';'
//! record-sep := '\n'
//! ```
//!
//! The name ends at the first `;` on a line and the email runs to the end of
//! the line. The last record may omit its trailing newline. Bytes that are
//! not valid UTF-8 are replaced with U+FFFD on read.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::BookError;

pub const FIELD_SEP: char = ';';
pub const RECORD_SEP: char = '\n';

/// Iterator over `(name, email)` pairs parsed from a reader
pub struct Records<R> {
    reader: R,
    origin: PathBuf,
    line_no: usize,
    buf: Vec<u8>,
}

/// Parse records from `reader`; `origin` names the source in errors
pub fn read_records<R: BufRead>(reader: R, origin: impl AsRef<Path>) -> Records<R> {
    Records {
        reader,
        origin: origin.as_ref().to_path_buf(),
        line_no: 0,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<(String, String), BookError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(BookError::io(&self.origin, e))),
            }
            self.line_no += 1;

            let raw = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf);
            if raw.is_empty() {
                continue;
            }
            let line = String::from_utf8_lossy(raw);

            return Some(match line.split_once(FIELD_SEP) {
                Some((name, email)) => Ok((name.to_string(), email.to_string())),
                None => Err(BookError::Malformed {
                    line: self.line_no,
                    content: line.to_string(),
                }),
            });
        }
    }
}

/// Reject a field that would split or shift a record
pub fn check_field(field: &str) -> std::io::Result<()> {
    if field.contains([FIELD_SEP, RECORD_SEP]) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("field {:?} contains ';' or a newline", field),
        ));
    }
    Ok(())
}

/// Write one `name;email\n` record
pub fn write_record<W: Write>(writer: &mut W, name: &str, email: &str) -> std::io::Result<()> {
    check_field(name)?;
    check_field(email)?;
    write!(writer, "{}{}{}{}", name, FIELD_SEP, email, RECORD_SEP)
}
