use std::{
    io,
    process::{Child, ExitStatus},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread,
    time::Duration,
};

const WAIT_POLL: Duration = Duration::from_millis(25);

/// Shared home of the one live child process.
///
/// The background run waits on it; the shutdown path may kill it. Both only
/// hold the lock for a single non-blocking call, so neither starves the other.
#[derive(Debug, Clone, Default)]
pub struct ProcessSlot {
    inner: Arc<Mutex<Option<Child>>>,
}

impl ProcessSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Child>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_occupied(&self) -> bool {
        self.lock().is_some()
    }

    /// Takes ownership of a freshly spawned child. Fails if one is already
    /// installed, handing the new child back so the caller can reap it.
    pub fn install(&self, child: Child) -> Result<(), Child> {
        let mut slot = self.lock();
        if slot.is_some() {
            return Err(child);
        }
        *slot = Some(child);
        Ok(())
    }

    /// Blocks until the installed child exits, then empties the slot.
    pub fn wait(&self) -> io::Result<ExitStatus> {
        loop {
            {
                let mut slot = self.lock();
                let child = slot.as_mut().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "no child process installed")
                })?;
                if let Some(status) = child.try_wait()? {
                    *slot = None;
                    return Ok(status);
                }
            }
            thread::sleep(WAIT_POLL);
        }
    }

    /// Best-effort kill. `Ok(false)` when there was nothing left to kill.
    /// The slot is left for `wait` to reap.
    pub fn terminate(&self) -> io::Result<bool> {
        let mut slot = self.lock();
        let Some(child) = slot.as_mut() else {
            return Ok(false);
        };

        if child.try_wait()?.is_some() {
            return Ok(false);
        }
        match child.kill() {
            Ok(()) => Ok(true),
            // Raced with a natural exit.
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => Ok(false),
            Err(e) => Err(e),
        }
    }
}
