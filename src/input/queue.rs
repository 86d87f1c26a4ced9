use heapless::Deque;

use super::{InputEvent, InputProvider};

pub const QUEUE_CAPACITY: usize = 32;

/// Bounded FIFO bridging push-style hosts to the polled
/// [`InputProvider`] seam. The engine drains it once per tick.
pub struct EventQueue {
    events: Deque<InputEvent, QUEUE_CAPACITY>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Enqueues `event`; returns `false` when the queue is full and the
    /// event was dropped.
    pub fn push(&mut self, event: InputEvent) -> bool {
        self.events.push_back(event).is_ok()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputProvider for EventQueue {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_push_order() {
        let mut queue = EventQueue::new();
        assert!(queue.push(InputEvent::PlayPause));
        assert!(queue.push(InputEvent::JumpForward));

        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::PlayPause)));
        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::JumpForward)));
        assert_eq!(queue.poll_event(), Ok(None));
    }

    #[test]
    fn overflow_reports_the_drop() {
        let mut queue = EventQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            assert!(queue.push(InputEvent::Reset));
        }

        assert!(!queue.push(InputEvent::PlayPause));
        assert_eq!(queue.len(), QUEUE_CAPACITY);
    }
}
