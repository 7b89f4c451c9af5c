use crate::{CatchUpReport, Cursor, SharedLog, Transport};

/// Deliver every live entry after `cursor` through `transport`.
///
/// Each step checks the cursor for eviction and fetches the next entry under
/// one read guard, then sends with the guard released. A cursor whose entry
/// was evicted (before the run or while a send was suspended) goes back to
/// the head, whose successor is the oldest live entry, so nothing is
/// delivered twice and no stale entry is walked.
///
/// Returns once a fetch finds nothing after a live cursor, i.e. at the tail.
/// A transport error is returned as-is with the cursor left on the last
/// entry that was fully sent.
pub async fn catch_up<T>(
    log: &SharedLog,
    cursor: &mut Cursor,
    transport: &mut T,
) -> Result<CatchUpReport, T::Error>
where
    T: Transport + ?Sized,
{
    let mut report = CatchUpReport::default();

    loop {
        let next = {
            let guard = log.read().await;

            if cursor.is_stale(&guard) {
                cursor.resync();
                report.resyncs += 1;
            }

            guard
                .next_after(cursor.last())
                .map(|entry| (entry.seq(), entry.payload().clone()))
        };

        let Some((seq, payload)) = next else {
            break;
        };

        transport.send(payload).await?;
        report.delivered += 1;
        cursor.advance(seq);
    }

    Ok(report)
}
