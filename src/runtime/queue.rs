use crate::task::Runnable;

use std::collections::VecDeque;

/// A task waiting in the ready queue, with the position it was given at
/// construction for diagnostics.
pub(crate) struct Entry<'a> {
    pub(crate) id: usize,
    pub(crate) task: Box<dyn Runnable + 'a>,
}

/// FIFO queue of suspended tasks.
///
/// Tasks are moved in and out by value, so an entry is never in the queue
/// twice and a popped task is owned by the loop until it is pushed back.
pub(crate) struct ReadyQueue<'a> {
    queue: VecDeque<Entry<'a>>,
}

impl<'a> ReadyQueue<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, entry: Entry<'a>) {
        self.queue.push_back(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<Entry<'a>> {
        self.queue.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{self, Step};

    fn idle(id: usize) -> Entry<'static> {
        Entry {
            id,
            task: Box::new(task::from_fn((), |_: &mut ()| Step::<()>::Suspended)),
        }
    }

    #[test]
    fn pops_in_insertion_order() {
        let mut queue = ReadyQueue::with_capacity(3);

        for id in 0..3 {
            queue.push(idle(id));
        }

        let order: Vec<_> = std::iter::from_fn(|| queue.pop()).map(|e| e.id).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn requeued_entries_go_to_the_back() {
        let mut queue = ReadyQueue::with_capacity(2);
        queue.push(idle(0));
        queue.push(idle(1));

        let first = queue.pop().map(|e| e.id);
        queue.push(idle(0));

        assert_eq!(first, Some(0));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().map(|e| e.id), Some(1));
        assert_eq!(queue.pop().map(|e| e.id), Some(0));
    }
}
