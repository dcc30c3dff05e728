use rand::rngs::{OsRng, ThreadRng};
use rand::RngCore;

/// Random bytes from the operating system, falling back to the thread-local
/// generator if the system source fails.
#[derive(Debug, Default)]
pub struct EntropySource {
    fallback: Option<ThreadRng>,
}

impl EntropySource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RngCore for EntropySource {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Some(rng) = &mut self.fallback {
            return rng.fill_bytes(dest);
        }
        if let Err(err) = OsRng.try_fill_bytes(dest) {
            tracing::warn!(%err, "system entropy unavailable; using the thread-local generator");
            self.fallback.insert(rand::thread_rng()).fill_bytes(dest);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
