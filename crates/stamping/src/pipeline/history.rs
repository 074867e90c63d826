//! Bounded undo/redo history for the pattern pipeline
//!
//! The pipeline only produces command payloads. Applying an undone or
//! redone command to layer contents is the caller's job.

use std::collections::VecDeque;

use tracing::debug;

use crate::types::{LayerId, Stroke};

use super::PatternPipeline;

/// An undoable command
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryCommand {
    /// A finished stroke was committed to its layer
    Stroke(Stroke),
    /// A layer was cleared
    ClearLayer(LayerId),
}

/// Bounded history: oldest entries are evicted on overflow, and any new
/// push clears the redo stack
#[derive(Debug, Clone)]
pub struct CommandHistory<T> {
    /// Most recent at the back
    undo_stack: VecDeque<T>,
    /// Most recently undone at the end
    redo_stack: Vec<T>,
    capacity: usize,
}

impl<T> CommandHistory<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, command: T) {
        self.redo_stack.clear();
        self.undo_stack.push_back(command);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
    }

    /// Move the newest command to the redo stack and return it
    pub fn undo(&mut self) -> Option<&T> {
        let command = self.undo_stack.pop_back()?;
        self.redo_stack.push(command);
        self.redo_stack.last()
    }

    /// Move the most recently undone command back and return it
    pub fn redo(&mut self) -> Option<&T> {
        let command = self.redo_stack.pop()?;
        self.undo_stack.push_back(command);
        self.undo_stack.back()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl PatternPipeline {
    /// Record a layer clear so it can be undone
    pub fn clear_layer(&mut self, layer_id: LayerId) {
        debug!("clear_layer: {:?}", layer_id);
        self.history.push(HistoryCommand::ClearLayer(layer_id));
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the last command
    ///
    /// Returns the command for the layer store to revert, or `None` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Option<&HistoryCommand> {
        let command = self.history.undo();
        if command.is_none() {
            debug!("Undo: no entries available");
        }
        command
    }

    /// Redo the last undone command
    pub fn redo(&mut self) -> Option<&HistoryCommand> {
        let command = self.history.redo();
        if command.is_none() {
            debug!("Redo: no entries available");
        }
        command
    }

    pub fn history(&self) -> &CommandHistory<HistoryCommand> {
        &self.history
    }
}
