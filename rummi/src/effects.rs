use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::TileId;

/// How often a wildcard advances to its next display color.
pub const CYCLE_TICK: Duration = Duration::from_millis(100);

/// Number of display colors a wildcard cycles through.
pub const WILDCARD_HUES: u8 = 4;

/// Background color-cycling tasks for wildcard tiles.
///
/// Each task owns a single hue slot (an index into the presentation
/// layer's color table) that it advances every tick. The slot is the
/// only state a task touches: board and game state stay single-threaded.
/// All tasks observe one shared shutdown flag and exit within one tick
/// of it being set; [`EffectPool::shutdown`] sets it and joins them.
pub struct EffectPool {
    shutdown: Arc<AtomicBool>,
    tasks: Vec<(TileId, JoinHandle<()>)>,
    hues: HashMap<TileId, Arc<AtomicU8>>,
}

impl EffectPool {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            tasks: Vec::new(),
            hues: HashMap::new(),
        }
    }

    /// Starts a cycling task for `tile` and returns its hue slot.
    ///
    /// Spawning the same tile again returns the existing slot instead of
    /// starting a second task.
    pub fn spawn_cycle(&mut self, tile: TileId) -> Arc<AtomicU8> {
        if let Some(hue) = self.hues.get(&tile) {
            return Arc::clone(hue);
        }
        let hue = Arc::new(AtomicU8::new(0));
        let slot = Arc::clone(&hue);
        let shutdown = Arc::clone(&self.shutdown);
        let handle = std::thread::spawn(move || {
            while !shutdown.load(Ordering::Relaxed) {
                let next = (slot.load(Ordering::Relaxed) + 1) % WILDCARD_HUES;
                slot.store(next, Ordering::Relaxed);
                std::thread::sleep(CYCLE_TICK);
            }
        });
        self.tasks.push((tile, handle));
        self.hues.insert(tile, Arc::clone(&hue));
        hue
    }

    /// The current hue index for a tile, if a task runs for it.
    pub fn hue(&self, tile: TileId) -> Option<u8> {
        self.hues.get(&tile).map(|h| h.load(Ordering::Relaxed))
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Sets the shared shutdown flag and joins every task.
    pub fn shutdown(mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        for (_, handle) in self.tasks.drain(..) {
            let _ = handle.join();
        }
    }
}

impl Default for EffectPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hues_stay_in_range_and_tasks_join_on_shutdown() {
        let mut pool = EffectPool::new();
        let hue = pool.spawn_cycle(TileId(104));
        pool.spawn_cycle(TileId(105));
        assert_eq!(pool.task_count(), 2);

        std::thread::sleep(CYCLE_TICK * 3);
        assert!(hue.load(Ordering::Relaxed) < WILDCARD_HUES);
        assert!(pool.hue(TileId(105)).unwrap() < WILDCARD_HUES);

        // Returning at all proves the tasks observed the flag.
        pool.shutdown();
    }

    #[test]
    fn respawning_reuses_the_existing_slot() {
        let mut pool = EffectPool::new();
        let first = pool.spawn_cycle(TileId(104));
        let second = pool.spawn_cycle(TileId(104));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(pool.task_count(), 1);
        pool.shutdown();
    }
}
