use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use super::EngineError;
use crate::board::{run_search, Board, Color, Move, SearchConfig, SearchResult};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A search running on its own thread.
pub struct SearchJob {
    /// Filled by the worker once the search completes
    result: Arc<Mutex<Option<SearchResult>>>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Start searching `board` for `side` on a new thread.
    ///
    /// # Errors
    ///
    /// `EngineError::Spawn` if the thread cannot be created.
    pub fn spawn(board: Board, side: Color, config: SearchConfig) -> Result<Self, EngineError> {
        Self::spawn_after(board, side, config, None)
    }

    /// Like [`SearchJob::spawn`], with the move that produced `board` so en
    /// passant replies are searched.
    ///
    /// # Errors
    ///
    /// `EngineError::Spawn` if the thread cannot be created.
    pub fn spawn_after(
        board: Board,
        side: Color,
        config: SearchConfig,
        last_move: Option<Move>,
    ) -> Result<Self, EngineError> {
        let result = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&result);

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                log::debug!("background search started for {side} at depth {}", config.depth);
                let outcome = run_search(&board, side, &config, last_move.as_ref());
                *slot.lock() = Some(outcome);
                log::debug!("background search finished for {side}");
            })?;

        Ok(SearchJob { result, handle })
    }

    /// True once the worker has stopped running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// The result, if the search has completed. Does not block.
    #[must_use]
    pub fn try_result(&self) -> Option<SearchResult> {
        *self.result.lock()
    }

    /// Block until the search completes and return its result.
    ///
    /// # Errors
    ///
    /// `EngineError::SearchPanicked` if the worker died without a result.
    pub fn wait(self) -> Result<SearchResult, EngineError> {
        self.handle
            .join()
            .map_err(|_| EngineError::SearchPanicked)?;
        let result = self.result.lock().take();
        result.ok_or(EngineError::SearchPanicked)
    }
}
