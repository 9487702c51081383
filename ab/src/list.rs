//! Name-ordered list of address entries

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::codec;
use crate::{AddressEntry, BookError, EMAIL_COL_WIDTH, NAME_COL_WIDTH};

/// Column widths for tabular output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub name_width: usize,
    pub email_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            name_width: NAME_COL_WIDTH,
            email_width: EMAIL_COL_WIDTH,
        }
    }
}

impl TableLayout {
    fn row(&self, name: &str, email: &str) -> String {
        format!(
            "{:<nw$}{:<ew$}",
            name,
            email,
            nw = self.name_width,
            ew = self.email_width
        )
    }
}

/// Address entries kept in ascending name order
///
/// Order is maintained by [`EntryList::insert_sorted`]. The positional
/// inserts ([`EntryList::insert_at_front`], [`EntryList::append`]) place
/// entries without looking at names and can leave the list unsorted.
///
/// Entries go in and come out by value; nothing handed to a caller borrows
/// into the list except [`EntryList::iter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<AddressEntry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding the records of an address book file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let mut list = Self::new();
        list.load_from(path)?;
        Ok(list)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the entry at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<AddressEntry> {
        self.entries.get(index).cloned()
    }

    /// First entry whose name equals `name` exactly
    pub fn search(&self, name: &str) -> Option<AddressEntry> {
        self.entries.iter().find(|e| e.name() == name).cloned()
    }

    /// Insert before the first entry whose name is not less than the new one
    ///
    /// Among equal names the newest entry comes first. The scan is linear so
    /// it stays well defined on a list the positional inserts have disturbed.
    pub fn insert_sorted(&mut self, entry: AddressEntry) {
        let pos = self
            .entries
            .iter()
            .position(|e| e.name() >= entry.name())
            .unwrap_or(self.entries.len());
        debug!(entry = entry.name(), pos, "insert_sorted");
        self.entries.insert(pos, entry);
    }

    /// Add an entry in name order
    pub fn add_entry(&mut self, entry: AddressEntry) {
        self.insert_sorted(entry);
    }

    pub fn insert_at_front(&mut self, entry: AddressEntry) {
        self.entries.insert(0, entry);
    }

    pub fn append(&mut self, entry: AddressEntry) {
        self.entries.push(entry);
    }

    /// Read records from a file and sorted-insert each one
    ///
    /// Existing entries are kept. Returns the number of records read.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize, BookError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BookError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.load_records(codec::read_records(BufReader::new(file), path))?;
        info!(path = %path.display(), count, "Loaded address book");
        Ok(count)
    }

    /// Read records from any buffered stream and sorted-insert each one
    pub fn load_from_reader<R: std::io::BufRead>(&mut self, reader: R) -> Result<usize, BookError> {
        self.load_records(codec::read_records(reader, "<stream>"))
    }

    fn load_records<R: std::io::BufRead>(&mut self, records: codec::Records<R>) -> Result<usize, BookError> {
        let mut count = 0;
        for record in records {
            let (name, email) = record?;
            self.insert_sorted(AddressEntry::new(name, email));
            count += 1;
        }
        Ok(count)
    }

    /// Write every entry to a file in current list order
    ///
    /// Fields are checked before the file is created, so an entry holding
    /// `;` or a newline leaves an existing file untouched.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), BookError> {
        let path = path.as_ref();
        self.check_fields().map_err(|e| BookError::io(path, e))?;
        let file = File::create(path).map_err(|source| BookError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        self.write_records(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| BookError::io(path, e))?;

        info!(path = %path.display(), count = self.entries.len(), "Saved address book");
        Ok(())
    }

    /// Write every entry to a stream in current list order
    pub fn save_to_writer<W: Write>(&self, mut writer: W) -> Result<(), BookError> {
        self.write_records(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| BookError::io("<stream>", e))
    }

    fn check_fields(&self) -> std::io::Result<()> {
        for entry in &self.entries {
            codec::check_field(entry.name())?;
            codec::check_field(entry.email())?;
        }
        Ok(())
    }

    fn write_records<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for entry in &self.entries {
            codec::write_record(writer, entry.name(), entry.email())?;
        }
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressEntry> {
        self.entries.iter()
    }

    /// Header row followed by one fixed-width row per entry
    pub fn rows(&self, layout: TableLayout) -> Rows<'_> {
        Rows {
            header: Some(layout.row("Name", "Email")),
            entries: self.entries.iter(),
            layout,
        }
    }

    pub fn print_all<W: Write>(&self, mut writer: W, layout: TableLayout) -> std::io::Result<()> {
        for row in self.rows(layout) {
            writeln!(writer, "{}", row)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a AddressEntry;
    type IntoIter = std::slice::Iter<'a, AddressEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Lazily formatted table rows, see [`EntryList::rows`]
pub struct Rows<'a> {
    header: Option<String>,
    entries: std::slice::Iter<'a, AddressEntry>,
    layout: TableLayout,
}

impl Iterator for Rows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(header) = self.header.take() {
            return Some(header);
        }
        self.entries.next().map(|e| self.layout.row(e.name(), e.email()))
    }
}
