use bytes::BytesMut;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

pub const PAYLOAD_SEED: u64 = 0;
pub const PAYLOAD_BLOCK_SIZE: usize = 64 * 1024;

/// Pool of equally sized blocks backing payload streams.
#[derive(Debug, Clone)]
pub struct BufferPool {
    buffers: Arc<Mutex<Vec<BytesMut>>>,
    buffer_size: usize,
    max_pooled: usize,
}

impl BufferPool {
    pub fn new(buffer_size: usize, max_pooled: usize) -> Self {
        Self {
            buffers: Arc::new(Mutex::new(Vec::with_capacity(max_pooled))),
            buffer_size,
            max_pooled,
        }
    }

    pub fn acquire(&self) -> BytesMut {
        let pooled = match self.buffers.lock() {
            Ok(mut buffers) => buffers.pop(),
            Err(_) => None,
        };
        pooled.unwrap_or_else(|| BytesMut::zeroed(self.buffer_size))
    }

    pub fn release(&self, buffer: BytesMut) {
        if buffer.len() != self.buffer_size {
            return;
        }

        if let Ok(mut buffers) = self.buffers.lock() {
            if buffers.len() < self.max_pooled {
                buffers.push(buffer);
            }
        }
    }

    pub fn pooled(&self) -> usize {
        self.buffers.lock().map(|buffers| buffers.len()).unwrap_or(0)
    }
}

/// Read-once, non-seekable source of `length` pseudo-random bytes.
///
/// Bytes come from a generator seeded with [`PAYLOAD_SEED`] and are produced in
/// fixed blocks, so the payload of length N is always the first N bytes of the
/// same sequence regardless of how the reader chunks its reads. Only
/// sequential reads are exposed. The backing block returns to its pool on drop.
pub struct PayloadStream {
    rng: StdRng,
    block: BytesMut,
    position: usize,
    remaining: u64,
    pool: BufferPool,
}

impl PayloadStream {
    pub fn new(pool: BufferPool, length: u64) -> Self {
        let block = pool.acquire();
        Self {
            rng: StdRng::seed_from_u64(PAYLOAD_SEED),
            position: block.len(),
            block,
            remaining: length,
            pool,
        }
    }
}

impl AsyncRead for PayloadStream {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        if this.remaining == 0 || buf.remaining() == 0 {
            return Poll::Ready(Ok(()));
        }

        if this.position == this.block.len() {
            this.rng.fill_bytes(&mut this.block[..]);
            this.position = 0;
        }

        let available = (this.block.len() - this.position) as u64;
        let count = available
            .min(this.remaining)
            .min(buf.remaining() as u64) as usize;
        buf.put_slice(&this.block[this.position..this.position + count]);
        this.position += count;
        this.remaining -= count as u64;
        Poll::Ready(Ok(()))
    }
}

impl Drop for PayloadStream {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.block));
    }
}
