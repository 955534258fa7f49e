//! Scan worker thread.
//!
//! Owns a [`LabelScanner`] and processes commands from the work queue until the
//! channel closes. Accepted results are forwarded to the display side.

use std::sync::mpsc::{Receiver, Sender};
use tracing::{debug, info};

use super::queue::ScanCommand;
use super::{LabelScanner, ScanResult};

/// Runs the scan worker loop.
///
/// Blocks until the command channel closes (all senders dropped) or the result
/// receiver is dropped, so it should run in a dedicated thread. Returns the
/// scanner so the caller can inspect or reuse its state.
pub fn run_scan_worker(
    receiver: Receiver<ScanCommand>,
    mut scanner: LabelScanner,
    results: Sender<(u64, ScanResult)>,
) -> LabelScanner {
    info!("Scan worker started");

    while let Ok(command) = receiver.recv() {
        match command {
            ScanCommand::Pass(item) => {
                let Some(result) = scanner.process_pass(&item.fragments) else {
                    debug!("Scan worker: pass {} produced no reading", item.pass);
                    continue;
                };

                if results.send((item.pass, result)).is_err() {
                    info!("Scan worker: result receiver dropped, exiting");
                    return scanner;
                }
            }
            ScanCommand::Reset => scanner.reset(),
        }
    }

    info!("Scan worker: channel closed, exiting");
    scanner
}
