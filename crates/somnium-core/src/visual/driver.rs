//! Render driver
//!
//! Hosts implement [`RenderSurface`] and the driver runs the cooperative
//! frame loop: measure elapsed time, `tick` the scene, present the commands,
//! repeat until cancelled. The [`Renderer`] registry guarantees at most one
//! active loop per surface id so draw calls never overlap on one surface.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use super::scene::{FrameCommand, VisualizationScene};

/// Default frame pacing (~30 fps)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Something frame commands can be presented on
///
/// The only host-specific piece of the renderer; everything upstream of it is
/// deterministic scene math.
pub trait RenderSurface: Send + 'static {
    /// Execute one frame's draw commands
    fn present(&mut self, frame: &[FrameCommand]);
}

/// Cancellation handle for one render loop
///
/// `cancel` is idempotent and safe to call after the loop has already
/// stopped or the surface is gone; it never errors.
#[derive(Debug, Clone)]
pub struct RenderHandle {
    cancelled: Arc<AtomicBool>,
}

impl RenderHandle {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop the loop. Safe to call any number of times.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether the loop has been told to stop
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Start a render loop on the current tokio runtime
///
/// The loop ticks at `frame_interval`, presents each frame, and exits the
/// first time it observes cancellation.
pub fn spawn_render_loop<S: RenderSurface>(
    mut surface: S,
    scene: VisualizationScene,
    frame_interval: Duration,
) -> RenderHandle {
    let handle = RenderHandle::new();
    let cancelled = Arc::clone(&handle.cancelled);

    tokio::spawn(async move {
        let start = Instant::now();
        let mut ticker = tokio::time::interval(frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            let elapsed = start.elapsed().as_secs_f64();
            surface.present(&scene.tick(elapsed));
        }

        debug!(
            elapsed_secs = start.elapsed().as_secs_f64(),
            "render loop stopped"
        );
    });

    handle
}

/// Registry of active render loops, one per surface id
///
/// Starting a visualization on a surface that already has one cancels the
/// previous loop first.
pub struct Renderer {
    frame_interval: Duration,
    active: Mutex<HashMap<String, RenderHandle>>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with the default frame pacing
    pub fn new() -> Self {
        Self::with_frame_interval(DEFAULT_FRAME_INTERVAL)
    }

    /// Create a renderer with custom frame pacing
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            active: Mutex::new(HashMap::new()),
        }
    }

    /// Start (or restart) the visualization bound to `surface_id`
    pub fn start<S: RenderSurface>(
        &self,
        surface_id: &str,
        surface: S,
        scene: VisualizationScene,
    ) -> RenderHandle {
        let handle = spawn_render_loop(surface, scene, self.frame_interval);

        let mut active = self.lock_active();
        if let Some(previous) = active.insert(surface_id.to_string(), handle.clone()) {
            debug!(surface_id, "cancelling previous render loop");
            previous.cancel();
        }

        handle
    }

    /// Cancel the loop bound to `surface_id`; false when none was active
    pub fn stop(&self, surface_id: &str) -> bool {
        match self.lock_active().remove(surface_id) {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancel every active loop
    pub fn stop_all(&self) {
        let mut active = self.lock_active();
        for handle in active.values() {
            handle.cancel();
        }
        active.clear();
    }

    fn lock_active(&self) -> std::sync::MutexGuard<'_, HashMap<String, RenderHandle>> {
        // A poisoned registry still only holds cancellation flags
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    struct CountingSurface(Arc<AtomicU32>);

    impl RenderSurface for CountingSurface {
        fn present(&mut self, _frame: &[FrameCommand]) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn test_scene() -> VisualizationScene {
        VisualizationScene::new(&["water".to_string()], Some("happy"), 64, 64)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_frames_and_is_idempotent() {
        let frames = Arc::new(AtomicU32::new(0));
        let handle = spawn_render_loop(
            CountingSurface(Arc::clone(&frames)),
            test_scene(),
            Duration::from_millis(10),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(frames.load(Ordering::Relaxed) > 0);

        handle.cancel();
        // Let the loop observe cancellation (at most one in-flight frame)
        tokio::time::sleep(Duration::from_millis(50)).await;
        let frozen = frames.load(Ordering::Relaxed);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(frames.load(Ordering::Relaxed), frozen);

        // Second cancel is a no-op, not an error
        handle.cancel();
        assert!(handle.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_surface_cancels_previous_loop() {
        let renderer = Renderer::with_frame_interval(Duration::from_millis(10));

        let first = renderer.start("canvas-1", CountingSurface(Arc::new(AtomicU32::new(0))), test_scene());
        assert!(!first.is_cancelled());

        let second = renderer.start("canvas-1", CountingSurface(Arc::new(AtomicU32::new(0))), test_scene());
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());

        // Distinct surfaces do not interfere
        let other = renderer.start("canvas-2", CountingSurface(Arc::new(AtomicU32::new(0))), test_scene());
        assert!(!second.is_cancelled());

        assert!(renderer.stop("canvas-1"));
        assert!(second.is_cancelled());
        assert!(!renderer.stop("canvas-1"));

        renderer.stop_all();
        assert!(other.is_cancelled());
    }
}
