use futures::future::join_all;
use sunflowers_core::batch::{plan_batches, SendOutcome};
use sunflowers_core::snapshot::Snapshot;

use crate::gateway::Gateway;

/// Push `snapshot` to the project store, batching large projects.
///
/// Every batch request is started at once and the call returns only after
/// all of them have settled. The outcome is a success only if every batch
/// succeeded.
pub async fn send(gateway: &Gateway, snapshot: &Snapshot, chunk_size: usize) -> SendOutcome {
    let batches = plan_batches(&snapshot.records, chunk_size);
    let total = batches.len();

    log::info!(
        "Sending {} files to {} in {} batch(es)",
        snapshot.len(),
        gateway.endpoints().store,
        total
    );

    let batch_futures = batches.into_iter().enumerate().map(|(index, batch)| async move {
        let result = gateway.store(batch).await;
        if let Err(err) = &result {
            log::error!("Batch {}/{} failed: {}", index + 1, total, err);
        }
        (batch.len(), result.is_ok())
    });

    let outcome = SendOutcome::fold(join_all(batch_futures).await);

    if outcome.is_success() {
        log::info!("Project sent ({} files)", outcome.records);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockito::Matcher;
    use sunflowers_core::session::{Endpoints, SessionIds};
    use sunflowers_core::snapshot::FileRecord;

    fn snapshot(n: usize) -> Snapshot {
        Snapshot {
            records: (0..n)
                .map(|i| FileRecord {
                    path: format!("demo/f{i}.py"),
                    last_modified: Utc::now(),
                    content: format!("v = {i}\n"),
                })
                .collect(),
            skipped: Vec::new(),
        }
    }

    fn gateway(server: &mockito::ServerGuard) -> Gateway {
        Gateway::new(
            reqwest::Client::new(),
            Endpoints::from_gateway(&server.url()),
            SessionIds::new("m", "s"),
        )
    }

    #[tokio::test]
    async fn test_small_snapshot_is_one_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/api/store")
            .match_query(Matcher::Any)
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let outcome = send(&gateway(&server), &snapshot(5), 3).await;

        mock.assert_async().await;
        assert_eq!(outcome.batches, 1);
        assert_eq!(outcome.records, 5);
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_large_snapshot_is_chunked() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/api/store")
            .match_query(Matcher::Any)
            .with_status(200)
            .expect(3)
            .create_async()
            .await;

        let outcome = send(&gateway(&server), &snapshot(7), 3).await;

        mock.assert_async().await;
        assert_eq!(outcome.batches, 3);
        assert_eq!(outcome.records, 7);
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_one_failed_batch_fails_the_send() {
        let mut server = mockito::Server::new_async().await;
        // The second batch holds f3..f5; fail only that one.
        let failing = server
            .mock("POST", "/v1/api/store")
            .match_query(Matcher::Any)
            .match_request(|request| {
                request.body().is_ok_and(|body| {
                    let mut json = String::new();
                    std::io::Read::read_to_string(
                        &mut flate2::read::GzDecoder::new(body.as_slice()),
                        &mut json,
                    )
                    .is_ok()
                        && json.contains("demo/f3.py")
                })
            })
            .with_status(500)
            .with_body(r#"{"error": "disk full"}"#)
            .expect(1)
            .create_async()
            .await;
        let ok = server
            .mock("POST", "/v1/api/store")
            .match_query(Matcher::Any)
            .with_status(200)
            .expect(2)
            .create_async()
            .await;

        let outcome = send(&gateway(&server), &snapshot(7), 3).await;

        failing.assert_async().await;
        ok.assert_async().await;
        assert_eq!(outcome.batches, 3);
        assert_eq!(outcome.failed, 1);
        assert!(!outcome.is_success());
    }
}
