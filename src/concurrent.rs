use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::probe::{probe_url, Pacing, ProbeResult};

/// Fixed-size pool of probe workers draining one pre-filled job queue.
///
/// The job queue is filled and closed before any worker starts, so workers
/// only ever wait on their own delay, the HTTP response, or a full result
/// channel. Results come back in completion order.
pub struct WorkerPool {
    client: Client,
    workers: usize,
    pacing: Pacing,
}

impl WorkerPool {
    pub fn new(client: Client, workers: usize, pacing: Pacing) -> Self {
        Self { client, workers: workers.max(1), pacing }
    }

    /// Spawn the workers and a supervisor. The returned channel is bounded to
    /// the worker count and closes once every worker has exited.
    /// Must be called from within a tokio runtime.
    pub fn run(self, urls: Vec<String>) -> mpsc::Receiver<ProbeResult> {
        let jobs = fill_queue(urls);
        let (tx, rx) = mpsc::channel(self.workers);

        let mut set = JoinSet::new();
        for id in 0..self.workers {
            set.spawn(worker(id, self.client.clone(), jobs.clone(), tx.clone(), self.pacing));
        }
        tokio::spawn(supervise(set, tx));
        rx
    }
}

/// Queue every URL up front and drop the sender so the queue reports
/// exhaustion once drained.
fn fill_queue(urls: Vec<String>) -> crossbeam_channel::Receiver<String> {
    let (tx, rx) = crossbeam_channel::bounded(urls.len());
    for url in urls {
        // capacity equals the URL count and `rx` is alive, so this never fails
        let _ = tx.try_send(url);
    }
    rx
}

async fn worker(
    id: usize,
    client: Client,
    jobs: crossbeam_channel::Receiver<String>,
    results: mpsc::Sender<ProbeResult>,
    pacing: Pacing,
) -> usize {
    let mut done = 0usize;
    while let Ok(url) = jobs.try_recv() {
        if let Some(delay) = pacing.next_delay() {
            tokio::time::sleep(delay).await;
        }
        let result = probe_url(&client, &url, pacing.user_agent()).await;
        if results.send(result).await.is_err() {
            tracing::warn!(worker = id, "result channel closed, worker stopping");
            break;
        }
        done += 1;
    }
    tracing::debug!(worker = id, done, "worker finished");
    done
}

/// Wait for all workers, then release the last sender so the aggregator sees
/// end-of-stream.
async fn supervise(mut set: JoinSet<usize>, results: mpsc::Sender<ProbeResult>) {
    let mut probed = 0usize;
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(n) => probed += n,
            Err(e) => tracing::error!(error = %e, "worker task failed"),
        }
    }
    tracing::debug!(probed, "all workers finished");
    drop(results);
}
