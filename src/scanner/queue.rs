//! Work queue for feeding OCR passes to a single scanner thread.
//!
//! Uses std::sync::mpsc: any number of capture threads can send, one worker
//! owns the scanner and processes passes in arrival order, so the smoothing
//! history never sees overlapping passes.

use chrono::{DateTime, Local};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::ocr::TextFragment;

/// One OCR pass waiting to be scanned.
#[derive(Debug, Clone)]
pub struct ScanWorkItem {
    /// Pass number assigned by the capture side
    pub pass: u64,
    /// Fragments recognized in this pass
    pub fragments: Vec<TextFragment>,
    /// When the pass was queued
    pub submitted_at: DateTime<Local>,
}

impl ScanWorkItem {
    pub fn new(pass: u64, fragments: Vec<TextFragment>) -> Self {
        Self {
            pass,
            fragments,
            submitted_at: Local::now(),
        }
    }
}

/// Messages accepted by the scan worker.
#[derive(Debug, Clone)]
pub enum ScanCommand {
    /// Scan one pass
    Pass(ScanWorkItem),
    /// Clear the smoothing history (the display expired its reading)
    Reset,
}

/// Creates a new work queue.
///
/// Returns a tuple of (sender, receiver). The channel is unbounded; the capture
/// side's own cadence keeps it short.
pub fn create_work_queue() -> (Sender<ScanCommand>, Receiver<ScanCommand>) {
    channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_queue_preserves_order() {
        let (sender, receiver) = create_work_queue();

        for pass in 1..=3 {
            sender
                .send(ScanCommand::Pass(ScanWorkItem::new(pass, Vec::new())))
                .expect("Failed to send");
        }
        sender.send(ScanCommand::Reset).expect("Failed to send");

        for expected in 1..=3 {
            match receiver.recv().expect("Failed to receive") {
                ScanCommand::Pass(item) => assert_eq!(item.pass, expected),
                ScanCommand::Reset => panic!("Reset arrived early"),
            }
        }
        assert!(matches!(receiver.recv(), Ok(ScanCommand::Reset)));
    }

    #[test]
    fn test_channel_closes_when_sender_dropped() {
        let (sender, receiver) = create_work_queue();
        sender.send(ScanCommand::Reset).unwrap();
        drop(sender);

        assert!(receiver.recv().is_ok());
        assert!(receiver.recv().is_err());
    }
}
