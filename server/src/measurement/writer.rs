use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
    pub writes: u64,
    pub bytes: u64,
}

/// Copies `data_size` bytes from `source` to `destination` through an app
/// buffer, issuing one write per chunk of `min(app_buffer_size, remaining)`.
pub async fn write_payload<R, W>(
    source: &mut R,
    destination: &mut W,
    data_size: u64,
    app_buffer_size: usize,
) -> io::Result<WriteStats>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = WriteStats::default();
    if data_size == 0 {
        return Ok(stats);
    }

    let buffer_size = (app_buffer_size as u64).min(data_size) as usize;
    let mut app_buffer = vec![0u8; buffer_size];
    while stats.bytes < data_size {
        let to_write = (buffer_size as u64).min(data_size - stats.bytes) as usize;
        let chunk = &mut app_buffer[..to_write];
        source.read_exact(chunk).await?;
        destination.write_all(chunk).await?;
        stats.writes += 1;
        stats.bytes += to_write as u64;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::payload::{BufferPool, PayloadStream, PAYLOAD_BLOCK_SIZE};
    use std::pin::Pin;
    use std::task::{Context, Poll};

    const MIB: u64 = 1024 * 1024;

    /// Records the size of every write call it receives.
    #[derive(Default)]
    struct RecordingWriter {
        writes: Vec<usize>,
        fail: bool,
    }

    impl AsyncWrite for RecordingWriter {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            let this = self.get_mut();
            if this.fail {
                return Poll::Ready(Err(io::Error::other("disk full")));
            }
            this.writes.push(buf.len());
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    fn payload(length: u64) -> PayloadStream {
        PayloadStream::new(BufferPool::new(PAYLOAD_BLOCK_SIZE, 1), length)
    }

    #[tokio::test]
    async fn given_zero_data_size_should_not_write() {
        let mut writer = RecordingWriter::default();
        let stats = write_payload(&mut payload(0), &mut writer, 0, 4096)
            .await
            .unwrap();
        assert_eq!(stats, WriteStats::default());
        assert!(writer.writes.is_empty());
    }

    #[tokio::test]
    async fn given_app_buffer_larger_than_payload_should_write_once() {
        let mut writer = RecordingWriter::default();
        let stats = write_payload(
            &mut payload(MIB),
            &mut writer,
            MIB,
            (4 * MIB) as usize,
        )
        .await
        .unwrap();
        assert_eq!(stats.writes, 1);
        assert_eq!(stats.bytes, MIB);
        assert_eq!(writer.writes, vec![MIB as usize]);
    }

    #[tokio::test]
    async fn given_uneven_payload_should_write_full_chunks_then_remainder() {
        let mut writer = RecordingWriter::default();
        let stats = write_payload(&mut payload(10_000), &mut writer, 10_000, 4096)
            .await
            .unwrap();
        assert_eq!(stats.writes, 3);
        assert_eq!(writer.writes, vec![4096, 4096, 1808]);
    }

    #[tokio::test]
    async fn write_failure_should_be_propagated() {
        let mut writer = RecordingWriter {
            fail: true,
            ..Default::default()
        };
        let result = write_payload(&mut payload(100), &mut writer, 100, 64).await;
        assert!(result.is_err());
    }
}
