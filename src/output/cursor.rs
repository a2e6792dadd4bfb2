use std::collections::VecDeque;

use crate::maf::AnnotatedRecord;

#[derive(Debug)]
enum CursorState {
    Loaded(VecDeque<AnnotatedRecord>),
    Drained,
}

/// Single-pass, order-preserving cursor over the annotated records of a run.
///
/// Starts `Loaded` and moves to `Drained` once the last record has been
/// handed out. A drained cursor keeps returning `None`.
#[derive(Debug)]
pub struct RecordCursor {
    state: CursorState,
}

impl RecordCursor {
    pub fn new(records: Vec<AnnotatedRecord>) -> Self {
        let state = if records.is_empty() {
            CursorState::Drained
        } else {
            CursorState::Loaded(records.into())
        };
        Self { state }
    }

    /// Remove and return the next record, or `None` at end of sequence.
    pub fn next_record(&mut self) -> Option<AnnotatedRecord> {
        let CursorState::Loaded(queue) = &mut self.state else {
            return None;
        };
        let record = queue.pop_front();
        if queue.is_empty() {
            self.state = CursorState::Drained;
        }
        record
    }

    pub fn is_drained(&self) -> bool {
        matches!(self.state, CursorState::Drained)
    }

    /// Records not yet pulled
    pub fn remaining(&self) -> usize {
        match &self.state {
            CursorState::Loaded(queue) => queue.len(),
            CursorState::Drained => 0,
        }
    }
}

impl Iterator for RecordCursor {
    type Item = AnnotatedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for RecordCursor {}
