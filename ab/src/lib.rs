//! AddressBook - name-ordered contact list
//!
//! Stores (name, email) records in a list kept in ascending name order,
//! with lookup by name, positional access, and a plain text file format
//! for loading and saving.
//!
//! # File Format
//!
//! ```text
//! Alice;alice@x.com
//! Bob;bob@y.com
//! ```
//!
//! One record per line, fields separated by `;`. There is no header and no
//! escaping, so neither field may contain `;` or a newline.
//!
//! # Example
//!
//! ```ignore
//! use addressbook::{AddressEntry, EntryList};
//!
//! let mut book = EntryList::from_file("addressbook.txt")?;
//! book.insert_sorted(AddressEntry::new("Carol", "carol@z.com"));
//! book.save_to("addressbook.txt")?;
//! ```

pub mod cli;
pub mod codec;
pub mod config;
mod entry;
mod error;
mod list;

pub use entry::AddressEntry;
pub use error::BookError;
pub use list::{EntryList, Rows, TableLayout};

/// Maximum length of a name or email, in characters
pub const MAX_FIELD_LEN: usize = 100;

/// Default width of the name column when printing
pub const NAME_COL_WIDTH: usize = 30;

/// Default width of the email column when printing
pub const EMAIL_COL_WIDTH: usize = 40;
