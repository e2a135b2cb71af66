// ## 📂 File: `src/batch.rs`
// ## Verify many images on a worker pool (pure wiring, no codec logic)

use std::path::{Path, PathBuf};
use std::thread;

use crossbeam::channel::{bounded, unbounded};

use crate::image::ImageSummary;
use crate::io::verify_firmware_file;
use crate::types::FirmwareError;

/// Result for one input path.
#[derive(Debug)]
pub struct VerifyOutcome {
    pub path: PathBuf,
    pub result: Result<ImageSummary, FirmwareError>,
}

impl VerifyOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Worker count actually used: `0` means one per CPU, never more than there are jobs.
pub fn effective_workers(requested: usize, jobs: usize) -> usize {
    let wanted = if requested == 0 { num_cpus::get() } else { requested };
    wanted.clamp(1, jobs.max(1))
}

/// Verify each image independently; outcomes come back in input order.
pub fn verify_many<P: AsRef<Path> + Sync>(paths: &[P], workers: usize) -> Vec<VerifyOutcome> {
    let workers = effective_workers(workers, paths.len());

    // ---- Channels ----
    let (job_tx, job_rx) = unbounded::<usize>();
    let (out_tx, out_rx) = bounded::<(usize, Result<ImageSummary, FirmwareError>)>(workers);

    for index in 0..paths.len() {
        if job_tx.send(index).is_err() {
            break;
        }
    }
    drop(job_tx); // workers stop once the queue drains

    let mut slots: Vec<Option<Result<ImageSummary, FirmwareError>>> =
        (0..paths.len()).map(|_| None).collect();

    thread::scope(|scope| {
        // ---- Workers ----
        for i in 0..workers {
            let rx = job_rx.clone();
            let tx = out_tx.clone();
            scope.spawn(move || {
                log::debug!("[WORKER-{i}] starting");
                for index in rx.iter() {
                    let result = verify_firmware_file(paths[index].as_ref());
                    if tx.send((index, result)).is_err() {
                        break;
                    }
                }
                log::debug!("[WORKER-{i}] finished");
            });
        }

        drop(out_tx);

        // ---- Collector ----
        for (index, result) in out_rx.iter() {
            slots[index] = Some(result);
        }
    });

    slots
        .into_iter()
        .zip(paths)
        .filter_map(|(slot, path)| {
            slot.map(|result| VerifyOutcome {
                path: path.as_ref().to_path_buf(),
                result,
            })
        })
        .collect()
}
