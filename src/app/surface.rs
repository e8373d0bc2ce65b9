//! Host seam for attaching the dialog surface.
//!
//! The dialog must be moved to the top-level presentation layer before it is
//! shown, and the host needs one scheduling tick to finish that move. The
//! [`DialogSurface`] trait models the move as a future; the selection session is
//! only started once that future resolves.

use crate::domain::Result;
use futures_util::future::LocalBoxFuture;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Presentation layer hosting the dialog.
pub trait DialogSurface {
    /// Moves the dialog to the top-level layer.
    ///
    /// The returned future resolves once the surface is mounted.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Mount`](crate::domain::PanelError::Mount) if the
    /// host cannot attach the surface.
    fn attach(&mut self) -> LocalBoxFuture<'_, Result<()>>;

    /// Removes the dialog from the top-level layer.
    fn detach(&mut self) {}
}

/// Future that stays pending for exactly one poll.
///
/// Wakes its task immediately, so an executor polls it again on the next tick.
#[derive(Debug, Default)]
pub struct NextTick {
    yielded: bool,
}

impl Future for NextTick {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Returns a future resolving on the next scheduling tick.
#[must_use]
pub fn next_tick() -> NextTick {
    NextTick::default()
}

/// Surface that reports itself mounted one tick after being attached.
#[derive(Debug, Default)]
pub struct TickSurface {
    attached: bool,
}

impl TickSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }
}

impl DialogSurface for TickSurface {
    fn attach(&mut self) -> LocalBoxFuture<'_, Result<()>> {
        Box::pin(async move {
            next_tick().await;
            self.attached = true;
            tracing::debug!("dialog surface attached");
            Ok(())
        })
    }

    fn detach(&mut self) {
        self.attached = false;
        tracing::debug!("dialog surface detached");
    }
}


#[cfg(test)]
mod tests {
    use super::testing::drive;
    use super::*;

    #[test]
    fn next_tick_is_pending_once() {
        let ((), polls) = drive(next_tick());
        assert_eq!(polls, 2);
    }

    #[test]
    fn tick_surface_attaches_after_one_tick() {
        let mut surface = TickSurface::new();

        let (result, polls) = drive(surface.attach());

        assert!(result.is_ok());
        assert_eq!(polls, 2);
        assert!(surface.is_attached());

        surface.detach();
        assert!(!surface.is_attached());
    }
}
