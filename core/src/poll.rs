//! Cancellable repeating task for the stats poll.
//!
//! The loop is executor- and timer-agnostic: the caller supplies the sleep
//! future (`gloo_timers` in the browser) and the tick. Everything runs on a
//! single thread, so the token is a plain `Rc<Cell<bool>>`.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Runs `tick` immediately, then again after every `sleep`, until `token`
/// is cancelled. The token is checked before each tick, including after a
/// sleep that started before cancellation, so no tick runs once the owner
/// has been torn down.
///
/// Returns the number of ticks run.
pub async fn run_polling<S, SF, T, TF>(token: CancelToken, mut sleep: S, mut tick: T) -> usize
where
    S: FnMut() -> SF,
    SF: Future<Output = ()>,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    let mut ticks = 0;
    loop {
        if token.is_cancelled() {
            break;
        }
        tick().await;
        ticks += 1;

        if token.is_cancelled() {
            break;
        }
        sleep().await;
    }
    log::debug!("Polling stopped after {} tick(s)", ticks);
    ticks
}
