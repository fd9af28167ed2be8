//! Output slots and the sinks that receive them.
//!
//! A render writes one string per [`Slot`]. Sinks decide what to do with the
//! values: [`TerminalSink`] prints the decorated block view, [`JsonSink`]
//! emits a JSON object keyed by slot id, and [`MemorySink`] keeps them for
//! inspection.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::Write;

/// Named output slot of the daylight view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Today's long date
    Date,
    Sunrise,
    Sunset,
    /// Today's daylight duration
    DayLength,
    /// Long date of the year's shortest day
    ShortestDate,
    /// Daylight duration of the shortest day
    ShortestLength,
    /// Today's duration minus the shortest day's
    Difference,
    /// Place, coordinates and zone
    Meta,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::Date,
        Slot::Sunrise,
        Slot::Sunset,
        Slot::DayLength,
        Slot::ShortestDate,
        Slot::ShortestLength,
        Slot::Difference,
        Slot::Meta,
    ];

    /// Stable identifier, used as the JSON key.
    pub fn id(self) -> &'static str {
        match self {
            Slot::Date => "date",
            Slot::Sunrise => "sunrise",
            Slot::Sunset => "sunset",
            Slot::DayLength => "daylen",
            Slot::ShortestDate => "minDay",
            Slot::ShortestLength => "minLen",
            Slot::Difference => "diff",
            Slot::Meta => "meta",
        }
    }
}

/// Receiver of rendered slot values.
///
/// `set` overwrites the previous value of a slot. `flush` is called once
/// after all slots of a render have been set.
pub trait DisplaySink {
    fn set(&mut self, slot: Slot, value: &str);

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps the last value of every slot.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    values: BTreeMap<Slot, String>,
    flushes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values.get(&slot).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<Slot, String> {
        &self.values
    }

    /// Number of completed renders.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl DisplaySink for MemorySink {
    fn set(&mut self, slot: Slot, value: &str) {
        self.values.insert(slot, value.to_string());
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Prints the values as a block of decorated log lines.
#[derive(Debug, Default)]
pub struct TerminalSink {
    values: MemorySink,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn value(&self, slot: Slot) -> &str {
        self.values
            .get(slot)
            .unwrap_or(crate::constants::PLACEHOLDER)
    }
}

impl DisplaySink for TerminalSink {
    fn set(&mut self, slot: Slot, value: &str) {
        self.values.set(slot, value);
    }

    fn flush(&mut self) -> Result<()> {
        log_block_start!("{}", self.value(Slot::Meta));

        log_block_start!("{}", self.value(Slot::Date));
        log_indented!("Sunrise:     {}", self.value(Slot::Sunrise));
        log_indented!("Sunset:      {}", self.value(Slot::Sunset));
        log_indented!("Day length:  {}", self.value(Slot::DayLength));

        log_block_start!("Shortest day: {}", self.value(Slot::ShortestDate));
        log_indented!("Day length:  {}", self.value(Slot::ShortestLength));
        log_indented!("Difference:  {}", self.value(Slot::Difference));

        self.values.flush()
    }
}

/// Writes all slots as one pretty-printed JSON object per render.
pub struct JsonSink<W: Write> {
    writer: W,
    values: BTreeMap<&'static str, String>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            values: BTreeMap::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for JsonSink<W> {
    fn set(&mut self, slot: Slot, value: &str) {
        self.values.insert(slot.id(), value.to_string());
    }

    fn flush(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.values)
            .context("Failed to serialize daylight values")?;
        writeln!(self.writer).context("Failed to write JSON output")?;
        self.writer.flush().context("Failed to flush JSON output")
    }
}
