use std::error::Error;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chaosbatch::dispatch::{Dispatcher, JobOutcome};
use chaosbatch::exec::{JobCommand, JobRunner, JobSpec};

type TestResult = Result<(), Box<dyn Error>>;

fn command() -> JobCommand {
    JobCommand::new("py lle_wolf.py", "-d 2")
}

fn files(n: usize) -> Vec<PathBuf> {
    (0..n).map(|i| PathBuf::from(format!("series-{i}.txt"))).collect()
}

/// A fake job runner that:
/// - records the order in which jobs started
/// - tracks the number of jobs in flight and the maximum ever observed
/// - sleeps to keep slots occupied, then succeeds or fails per `fail_for`.
#[derive(Default)]
struct RecordingRunner {
    started: Arc<Mutex<Vec<PathBuf>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    delay: Duration,
    fail_for: Option<PathBuf>,
}

impl JobRunner for RecordingRunner {
    fn run(&self, spec: JobSpec) -> Pin<Box<dyn Future<Output = JobOutcome> + Send + '_>> {
        let started = Arc::clone(&self.started);
        let in_flight = Arc::clone(&self.in_flight);
        let max_in_flight = Arc::clone(&self.max_in_flight);
        let delay = self.delay;
        let fail = self.fail_for.as_deref() == Some(spec.file.as_path());

        Box::pin(async move {
            started.lock().unwrap().push(spec.file.clone());
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_flight.fetch_max(now, Ordering::SeqCst);

            tokio::time::sleep(delay).await;

            in_flight.fetch_sub(1, Ordering::SeqCst);
            if fail {
                JobOutcome::failed(spec.file, 1)
            } else {
                JobOutcome::success(spec.file)
            }
        })
    }
}

#[tokio::test]
async fn concurrency_never_exceeds_the_worker_limit() -> TestResult {
    let runner = Arc::new(RecordingRunner {
        delay: Duration::from_millis(25),
        ..Default::default()
    });
    let max_in_flight = Arc::clone(&runner.max_in_flight);

    let dispatcher = Dispatcher::new(runner, 4);
    let summary = dispatcher.run(files(10), command()).await?;

    assert_eq!(summary.total(), 10);
    assert!(max_in_flight.load(Ordering::SeqCst) <= 4);
    Ok(())
}

#[tokio::test]
async fn every_file_runs_exactly_once() -> TestResult {
    let runner = Arc::new(RecordingRunner {
        delay: Duration::from_millis(5),
        ..Default::default()
    });
    let started = Arc::clone(&runner.started);

    let dispatcher = Dispatcher::new(runner, 3);
    let summary = dispatcher.run(files(7), command()).await?;

    assert_eq!(summary.succeeded, 7);
    assert_eq!(summary.failed, 0);

    let mut ran = started.lock().unwrap().clone();
    ran.sort();
    let mut expected = files(7);
    expected.sort();
    assert_eq!(ran, expected);
    Ok(())
}

#[tokio::test]
async fn admission_is_fifo_in_discovery_order() -> TestResult {
    // With a single worker, start order is fully deterministic.
    let runner = Arc::new(RecordingRunner::default());
    let started = Arc::clone(&runner.started);

    let dispatcher = Dispatcher::new(runner, 1);
    dispatcher.run(files(5), command()).await?;

    assert_eq!(*started.lock().unwrap(), files(5));
    Ok(())
}

#[tokio::test]
async fn run_does_not_return_while_jobs_are_in_flight() -> TestResult {
    let runner = Arc::new(RecordingRunner {
        delay: Duration::from_millis(30),
        ..Default::default()
    });
    let in_flight = Arc::clone(&runner.in_flight);

    let dispatcher = Dispatcher::new(runner, 2);
    let summary = dispatcher.run(files(6), command()).await?;

    // Drained: by the time `run` returns, every slot has been released.
    assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    assert_eq!(summary.total(), 6);
    Ok(())
}

#[tokio::test]
async fn one_failed_job_does_not_stop_the_rest() -> TestResult {
    let runner = Arc::new(RecordingRunner {
        fail_for: Some(PathBuf::from("series-2.txt")),
        ..Default::default()
    });

    let dispatcher = Dispatcher::new(runner, 2);
    let summary = dispatcher.run(files(5), command()).await?;

    assert_eq!(summary.succeeded, 4);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failures, vec![(PathBuf::from("series-2.txt"), 1)]);
    Ok(())
}

/// Fails every job, holding earlier submissions longest so completion order
/// is the reverse of submission order.
struct ReversedFinishRunner;

impl JobRunner for ReversedFinishRunner {
    fn run(&self, spec: JobSpec) -> Pin<Box<dyn Future<Output = JobOutcome> + Send + '_>> {
        Box::pin(async move {
            let delay = match spec.file.to_str() {
                Some("series-0.txt") => 90,
                Some("series-1.txt") => 60,
                _ => 30,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            JobOutcome::failed(spec.file, 1)
        })
    }
}

#[tokio::test]
async fn failures_are_reported_in_submission_order() -> TestResult {
    // Three workers admit all three jobs at once; the summary must still
    // list the failures as submitted, not as they finished.
    let dispatcher = Dispatcher::new(Arc::new(ReversedFinishRunner), 3);
    let summary = dispatcher.run(files(3), command()).await?;

    assert_eq!(summary.failed, 3);
    let order: Vec<PathBuf> = summary.failures.iter().map(|(f, _)| f.clone()).collect();
    assert_eq!(order, files(3));
    Ok(())
}

/// A runner that blocks every job on a shared barrier. If the dispatcher
/// could not admit all jobs of an exactly-worker-limit-sized batch in the
/// initial pass, this would deadlock (guarded by the timeout).
struct BarrierRunner {
    barrier: Arc<tokio::sync::Barrier>,
}

impl JobRunner for BarrierRunner {
    fn run(&self, spec: JobSpec) -> Pin<Box<dyn Future<Output = JobOutcome> + Send + '_>> {
        let barrier = Arc::clone(&self.barrier);
        Box::pin(async move {
            barrier.wait().await;
            JobOutcome::success(spec.file)
        })
    }
}

#[tokio::test]
async fn a_worker_limit_sized_batch_is_admitted_in_one_pass() -> TestResult {
    let workers = 4;
    let runner = Arc::new(BarrierRunner {
        barrier: Arc::new(tokio::sync::Barrier::new(workers)),
    });

    let dispatcher = Dispatcher::new(runner, workers);
    let summary = tokio::time::timeout(
        Duration::from_secs(5),
        dispatcher.run(files(workers), command()),
    )
    .await??;

    assert_eq!(summary.succeeded, workers);
    Ok(())
}
