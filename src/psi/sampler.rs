use tokio::sync::{mpsc, oneshot};

use super::Resource;
use super::error::{PsiError, RoundError};
use super::reader::CounterSource;

struct SampleRequest {
    reply: oneshot::Sender<Result<u64, PsiError>>,
}

/// One long-lived sampling worker per tracked resource.
///
/// Each worker owns its counter source, so reads against one resource are
/// serialized while distinct resources sample in parallel. Requests carry a
/// oneshot reply channel; once dispatched they never block each other.
/// Workers are scoped to the process lifetime and have no shutdown path.
pub struct SamplerPool {
    requests: [mpsc::UnboundedSender<SampleRequest>; Resource::COUNT],
}

impl SamplerPool {
    pub fn spawn<S, F>(mut make_source: F) -> Self
    where
        S: CounterSource,
        F: FnMut(Resource) -> S,
    {
        let requests = Resource::ALL.map(|resource| {
            let (tx, mut rx) = mpsc::unbounded_channel::<SampleRequest>();
            let mut source = make_source(resource);
            tokio::spawn(async move {
                while let Some(SampleRequest { reply }) = rx.recv().await {
                    let _ = reply.send(source.read_total());
                }
            });
            tx
        });
        Self { requests }
    }

    /// Runs one synchronized round: fans a request out to every worker,
    /// then joins all replies. The first failure aborts the round.
    pub async fn sample_all(&self) -> Result<[u64; Resource::COUNT], RoundError> {
        let mut pending = Vec::with_capacity(Resource::COUNT);
        for (resource, tx) in Resource::ALL.into_iter().zip(&self.requests) {
            let (reply, rx) = oneshot::channel();
            tx.send(SampleRequest { reply })
                .map_err(|_| RoundError::WorkerGone { resource })?;
            pending.push((resource, rx));
        }

        let mut totals = [0u64; Resource::COUNT];
        for (resource, rx) in pending {
            let result = rx.await.map_err(|_| RoundError::WorkerGone { resource })?;
            totals[resource.index()] =
                result.map_err(|source| RoundError::Sample { resource, source })?;
        }
        Ok(totals)
    }
}
