use crate::core::codec;
use crate::domain::model::Boat;
use crate::utils::error::{DecodeError, RepoError, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::cmp::Ordering;
use std::io::{Read, Write};

pub const MAX_BOATS: usize = 120;

/// Fixed-capacity set of slots. Free slots are reused first-come.
#[derive(Debug, Clone)]
pub struct Repository {
    slots: Vec<Option<Boat>>,
}

/// A row the loader dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub error: DecodeError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
    /// Capacity ran out before the source did.
    pub truncated: bool,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(MAX_BOATS)
    }
}

impl Repository {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Boat> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Boat> {
        self.slots.iter_mut().flatten()
    }

    /// Names are not checked for uniqueness; lookups act on the first match.
    pub fn add(&mut self, boat: Boat) -> std::result::Result<(), RepoError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(RepoError::CapacityExceeded { capacity })?;

        tracing::debug!("Adding boat '{}'", boat.name);
        *slot = Some(boat);
        Ok(())
    }

    pub fn remove_by_name(&mut self, name: &str) -> std::result::Result<Boat, RepoError> {
        self.slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|boat| boat.has_name(name)))
            .and_then(Option::take)
            .ok_or_else(|| RepoError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Boat> {
        self.iter().find(|boat| boat.has_name(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Boat> {
        self.iter_mut().find(|boat| boat.has_name(name))
    }

    /// Display order: case-insensitive by name. Slot order is untouched.
    pub fn sorted_view(&self) -> Vec<&Boat> {
        let mut boats: Vec<&Boat> = self.iter().collect();
        boats.sort_by(|a, b| compare_names(&a.name, &b.name));
        boats
    }

    /// Reads rows until the source or the capacity runs out. Rows that do not
    /// decode are logged and skipped. A source that fails before its first row
    /// (a directory, say) loads as an empty marina; a failure after that is
    /// returned so a partly read file is not overwritten.
    pub fn load_all<R: Read>(source: R, capacity: usize) -> Result<(Self, LoadReport)> {
        let mut repository = Self::new(capacity);
        let mut report = LoadReport::default();

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(source);

        let mut record = StringRecord::new();
        let mut rows_read = 0usize;
        loop {
            match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => rows_read += 1,
                Err(e) if e.is_io_error() && rows_read == 0 => {
                    tracing::warn!("Cannot read boat data ({}); starting with an empty marina", e);
                    return Ok((Self::new(capacity), LoadReport::default()));
                }
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("Skipping unreadable row: {}", e);
                    continue;
                }
            }
            let line = record.position().map_or(0, |pos| pos.line());

            if repository.is_full() {
                tracing::warn!(
                    "Marina is full ({} boats); ignoring rows from line {} on",
                    capacity,
                    line
                );
                report.truncated = true;
                break;
            }

            match codec::decode_record(&record) {
                Ok(boat) => {
                    repository.add(boat)?;
                    report.loaded += 1;
                }
                Err(error) => {
                    tracing::warn!("Skipping invalid row at line {}: {}", line, error);
                    report.skipped.push(SkippedRow { line, error });
                }
            }
        }

        tracing::info!(
            "Loaded {} boats ({} rows skipped)",
            report.loaded,
            report.skipped.len()
        );
        Ok((repository, report))
    }

    /// One row per occupied slot, in slot order.
    pub fn save_all<W: Write>(&self, sink: W) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(csv::QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);

        for boat in self.iter() {
            writer.write_record(&codec::encode_record(boat))?;
        }
        writer.flush()?;

        tracing::debug!("Saved {} boats", self.len());
        Ok(())
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}
