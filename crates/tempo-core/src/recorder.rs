//! Per-request interval recorder.
//!
//! One `Recorder` exists per in-flight request. It maps interval names to
//! entries in first-start order; that order is what the serialized
//! `Server-Timing` value uses. Entries are never removed — an interval that
//! was started but never ended still serializes (name and description, no
//! `dur`), which is exactly what a skipped pipeline phase looks like.

use std::fmt::Write;
use std::time::Instant;

use crate::error::{Result, TempoError};

/// A single named interval.
#[derive(Debug, Clone)]
pub struct TimingEntry {
    /// Interval name (unique within one recorder).
    pub name: String,
    /// Optional human-readable description, emitted as `desc="..."`.
    pub description: Option<String>,
    /// Monotonic start timestamp.
    pub start: Instant,
    /// Fractional milliseconds, set once by `end`. `None` until ended.
    pub duration: Option<f64>,
}

/// Ordered name -> entry mapping for one request.
///
/// Small and short-lived by construction (a handful of entries per request),
/// so a Vec with linear lookup beats any map here and keeps insertion order
/// for free.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Vec<TimingEntry>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the interval `name`.
    ///
    /// Restarting an existing name refreshes its timestamp and description
    /// and clears any recorded duration, but keeps its original position in
    /// the serialization order. Always succeeds.
    pub fn start(&mut self, name: &str, description: Option<&str>) {
        let entry = TimingEntry {
            name: name.to_string(),
            description: description.map(str::to_string),
            start: Instant::now(),
            duration: None,
        };

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// End the interval `name`, recording its duration in fractional
    /// milliseconds.
    ///
    /// Fails with [`TempoError::EntryNotFound`] when `name` was never
    /// started; the recorder is left untouched in that case. The error is a
    /// programming mistake in timing usage (mismatched start/end) and is
    /// meant to surface, not to be swallowed.
    pub fn end(&mut self, name: &str) -> Result<&TimingEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| TempoError::EntryNotFound(name.to_string()))?;

        let elapsed = entry.start.elapsed();
        let millis = elapsed.as_secs() as f64 * 1e3 + f64::from(elapsed.subsec_nanos()) * 1e-6;
        entry.duration = Some(millis);

        tracing::trace!(name, millis, "interval ended");
        Ok(entry)
    }

    /// Entries in first-start order.
    pub fn entries(&self) -> &[TimingEntry] {
        &self.entries
    }

    /// Serialize all entries into one `Server-Timing` header value.
    ///
    /// Read-only: serializing never mutates the recorder. Format per entry is
    /// `name[;dur=<ms>][;desc="<text>"]`, comma-separated, insertion order.
    pub fn header_value(&self) -> String {
        let mut value = String::new();

        for entry in &self.entries {
            if !value.is_empty() {
                value.push(',');
            }
            value.push_str(&entry.name);

            if let Some(dur) = entry.duration {
                let _ = write!(value, ";dur={dur}");
            }
            if let Some(desc) = &entry.description {
                let _ = write!(value, ";desc=\"{desc}\"");
            }
        }

        value
    }
}
