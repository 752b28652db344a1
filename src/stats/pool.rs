use super::hands::Row;
use super::progress::Progress;
use crate::JOB_CAPACITY;
use crate::RESULT_CAPACITY;
use crate::cards::Hand;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;

/// Evaluate every hand on a fixed pool of blocking workers.
///
/// A producer task deals hands round-robin into one bounded job queue per
/// worker. Workers push rows into a shared bounded result queue, which the
/// caller drains until every worker hangs up. Rows come back in completion
/// order.
pub async fn evaluate(hands: Vec<Hand>, workers: usize) -> anyhow::Result<Vec<Row>> {
    let workers = workers.max(1);
    let total = hands.len();
    let (rows_tx, mut rows_rx) = tokio::sync::mpsc::channel::<Row>(RESULT_CAPACITY);
    let mut queues = Vec::with_capacity(workers);
    let mut tasks = Vec::with_capacity(workers);
    for _ in 0..workers {
        let (jobs_tx, jobs_rx) = tokio::sync::mpsc::channel::<Hand>(JOB_CAPACITY);
        let rows_tx = rows_tx.clone();
        tasks.push(tokio::task::spawn_blocking(move || work(jobs_rx, rows_tx)));
        queues.push(jobs_tx);
    }
    drop(rows_tx);
    log::info!("evaluating {} hands on {} workers", total, workers);
    let producer = tokio::spawn(produce(hands, queues));
    let mut progress = Progress::new(total);
    let mut rows = Vec::with_capacity(total);
    while let Some(row) = rows_rx.recv().await {
        progress.tick();
        rows.push(row);
    }
    producer.await?;
    for task in tasks {
        task.await?;
    }
    log::info!("evaluated {} hands", progress.complete());
    Ok(rows)
}

async fn produce(hands: Vec<Hand>, queues: Vec<Sender<Hand>>) {
    for (i, hand) in hands.into_iter().enumerate() {
        if queues[i % queues.len()].send(hand).await.is_err() {
            log::warn!("worker hung up before the queue drained");
            return;
        }
    }
}

fn work(mut jobs: Receiver<Hand>, rows: Sender<Row>) {
    while let Some(hand) = jobs.blocking_recv() {
        if rows.blocking_send(Row::from(hand)).is_err() {
            return;
        }
    }
}
