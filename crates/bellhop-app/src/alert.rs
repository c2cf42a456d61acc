// Rust guideline compliant 2026-10-18

//! Audible alerts for newly filed tickets.
//!
//! Alerting is a capability handed to the service, not a platform check inside
//! it. [`TerminalBell`] rings the terminal bell once per tone of the pattern;
//! [`SilentAlerter`] does nothing and is used where no sound is wanted.

use bellhop_core::URGENT_PRIORITY;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use thiserror::Error;

/// Escalation tier of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// A single short tone.
    Normal,
    /// A repeated two-tone pattern.
    Urgent,
}

impl AlertLevel {
    /// Maps a ticket priority to an alert tier.
    ///
    /// Only the exact string `urgent` escalates; every other value, including
    /// unrecognized ones, gets the normal tier.
    #[must_use]
    pub fn for_priority(priority: &str) -> Self {
        if priority == URGENT_PRIORITY {
            AlertLevel::Urgent
        } else {
            AlertLevel::Normal
        }
    }
}

/// A single tone in an alert pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: u32,
    /// Length in milliseconds.
    pub duration_ms: u64,
}

const NORMAL_TONE: Tone = Tone {
    frequency_hz: 800,
    duration_ms: 300,
};

const URGENT_LOW: Tone = Tone {
    frequency_hz: 1000,
    duration_ms: 200,
};

const URGENT_HIGH: Tone = Tone {
    frequency_hz: 1500,
    duration_ms: 200,
};

const NORMAL_PATTERN: [Tone; 1] = [NORMAL_TONE];

const URGENT_PATTERN: [Tone; 6] = [
    URGENT_LOW,
    URGENT_HIGH,
    URGENT_LOW,
    URGENT_HIGH,
    URGENT_LOW,
    URGENT_HIGH,
];

/// Returns the fixed tone sequence for an alert tier.
#[must_use]
pub fn tone_pattern(level: AlertLevel) -> &'static [Tone] {
    match level {
        AlertLevel::Normal => &NORMAL_PATTERN,
        AlertLevel::Urgent => &URGENT_PATTERN,
    }
}

/// Alert delivery errors.
#[derive(Debug, Error)]
pub enum AlertError {
    /// Writing to the output device failed.
    #[error("Alert output failed: {0}")]
    Io(#[from] std::io::Error),
    /// The alert device cannot be used.
    #[error("Alert device unavailable: {0}")]
    Unavailable(String),
}

/// Capability for signalling a new ticket to the operator.
pub trait Alerter: Send + Sync {
    /// Emits the alert for the given tier.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert could not be delivered. Callers treat
    /// alerts as best-effort and do not fail on this.
    fn alert(&self, level: AlertLevel) -> Result<(), AlertError>;
}

/// Alerter that never makes a sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAlerter;

impl Alerter for SilentAlerter {
    fn alert(&self, _level: AlertLevel) -> Result<(), AlertError> {
        Ok(())
    }
}

/// Rings the terminal bell (BEL, `0x07`) once per tone.
///
/// With pacing on, each bell is followed by a pause as long as the tone so
/// repeated bells stay distinguishable. Paced patterns play on a background
/// thread and [`Alerter::alert`] returns immediately. Dropping the bell waits
/// for patterns still playing.
pub struct TerminalBell<W: Write + Send + 'static> {
    out: Arc<Mutex<W>>,
    pace: bool,
    playing: Mutex<Vec<JoinHandle<()>>>,
}

impl TerminalBell<std::io::Stderr> {
    /// Creates a paced bell on stderr.
    ///
    /// Stdout carries the MCP transport, so the bell never goes there.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr(), true)
    }
}

impl<W: Write + Send + 'static> TerminalBell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(out: W, pace: bool) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            pace,
            playing: Mutex::new(Vec::new()),
        }
    }

    /// Blocks until every pattern started so far has finished playing.
    pub fn wait(&self) {
        let handles = match self.playing.lock() {
            Ok(mut playing) => std::mem::take(&mut *playing),
            Err(_) => return,
        };
        for handle in handles {
            if handle.join().is_err() {
                tracing::warn!("alert playback thread panicked");
            }
        }
    }

    fn spawn_playback(&self, level: AlertLevel) -> Result<(), AlertError> {
        let out = Arc::clone(&self.out);
        let handle = std::thread::Builder::new()
            .name("bellhop-bell".to_string())
            .spawn(move || {
                let result = out
                    .lock()
                    .map_err(|err| AlertError::Unavailable(err.to_string()))
                    .and_then(|mut out| ring(&mut *out, level, true));
                if let Err(err) = result {
                    tracing::warn!(error = %err, "alert playback failed");
                }
            })?;

        let mut playing = self
            .playing
            .lock()
            .map_err(|err| AlertError::Unavailable(err.to_string()))?;
        playing.retain(|handle| !handle.is_finished());
        playing.push(handle);
        Ok(())
    }
}

fn ring<W: Write>(out: &mut W, level: AlertLevel, pace: bool) -> Result<(), AlertError> {
    for tone in tone_pattern(level) {
        out.write_all(b"\x07")?;
        out.flush()?;
        if pace {
            std::thread::sleep(Duration::from_millis(tone.duration_ms));
        }
    }
    Ok(())
}

impl<W: Write + Send + 'static> Alerter for TerminalBell<W> {
    fn alert(&self, level: AlertLevel) -> Result<(), AlertError> {
        if self.pace {
            return self.spawn_playback(level);
        }

        let mut out = self
            .out
            .lock()
            .map_err(|err| AlertError::Unavailable(err.to_string()))?;
        ring(&mut *out, level, false)
    }
}

impl<W: Write + Send + 'static> Drop for TerminalBell<W> {
    fn drop(&mut self) {
        self.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_only_exact_urgent_escalates() {
        assert_eq!(AlertLevel::for_priority("urgent"), AlertLevel::Urgent);
        assert_eq!(AlertLevel::for_priority("normal"), AlertLevel::Normal);
        assert_eq!(AlertLevel::for_priority("high"), AlertLevel::Normal);
        assert_eq!(AlertLevel::for_priority("Urgent"), AlertLevel::Normal);
        assert_eq!(AlertLevel::for_priority("asap!!"), AlertLevel::Normal);
        assert_eq!(AlertLevel::for_priority(""), AlertLevel::Normal);
    }

    #[test]
    fn test_tone_patterns() {
        let normal = tone_pattern(AlertLevel::Normal);
        assert_eq!(normal.len(), 1);
        assert_eq!(normal[0].frequency_hz, 800);
        assert_eq!(normal[0].duration_ms, 300);

        let urgent = tone_pattern(AlertLevel::Urgent);
        assert_eq!(urgent.len(), 6);
        for pair in urgent.chunks(2) {
            assert_eq!(pair[0].frequency_hz, 1000);
            assert_eq!(pair[1].frequency_hz, 1500);
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> Vec<u8> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_terminal_bell_rings_once_per_tone() {
        let buffer = SharedBuffer::default();
        let bell = TerminalBell::new(buffer.clone(), false);
        bell.alert(AlertLevel::Normal).unwrap();
        bell.alert(AlertLevel::Urgent).unwrap();

        assert_eq!(buffer.contents(), vec![0x07; 7]);
    }

    #[test]
    fn test_paced_bell_returns_before_pattern_ends() {
        let buffer = SharedBuffer::default();
        let bell = TerminalBell::new(buffer.clone(), true);

        let started = Instant::now();
        bell.alert(AlertLevel::Urgent).unwrap();
        assert!(started.elapsed() < Duration::from_millis(600));

        bell.wait();
        assert!(started.elapsed() >= Duration::from_millis(1200));
        assert_eq!(buffer.contents(), vec![0x07; 6]);
    }

    #[test]
    fn test_dropping_paced_bell_finishes_pattern() {
        let buffer = SharedBuffer::default();
        let bell = TerminalBell::new(buffer.clone(), true);
        bell.alert(AlertLevel::Normal).unwrap();
        drop(bell);

        assert_eq!(buffer.contents(), vec![0x07]);
    }

    #[test]
    fn test_silent_alerter_is_ok() {
        assert!(SilentAlerter.alert(AlertLevel::Urgent).is_ok());
    }
}
