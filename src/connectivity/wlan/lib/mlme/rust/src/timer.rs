// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct EventId(pub u64);

/// Schedules and cancels timeouts on behalf of the interface. The owner of the scheduler reports
/// expired events back through `Timer::triggered`.
pub trait Scheduler {
    /// Requests to schedule an event. Returns a unique ID used to cancel the scheduled event.
    fn schedule(&mut self, deadline: Instant) -> EventId;
    /// Cancels a previously scheduled event.
    fn cancel(&mut self, id: EventId);
}

/// A timer to schedule and cancel timeouts and retrieve triggered events.
pub struct Timer<E> {
    events: HashMap<EventId, E>,
    scheduler: Box<dyn Scheduler>,
}

impl<E> Timer<E> {
    pub fn new(scheduler: Box<dyn Scheduler>) -> Self {
        Self { events: HashMap::default(), scheduler }
    }

    pub fn triggered(&mut self, event_id: &EventId) -> Option<E> {
        self.events.remove(event_id)
    }

    pub fn schedule_event(&mut self, deadline: Instant, event: E) -> EventId {
        let event_id = self.scheduler.schedule(deadline);
        self.events.insert(event_id, event);
        event_id
    }

    pub fn schedule_after(&mut self, duration: Duration, event: E) -> EventId {
        self.schedule_event(Instant::now() + duration, event)
    }

    pub fn cancel_event(&mut self, event_id: EventId) {
        self.events.remove(&event_id);
        self.scheduler.cancel(event_id);
    }

    pub fn cancel_all(&mut self) {
        for event_id in self.events.keys() {
            self.scheduler.cancel(*event_id);
        }
        self.events.clear();
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
pub use fake::FakeScheduler;

#[cfg(test)]
mod fake {
    use {
        super::*,
        parking_lot::Mutex,
        std::sync::Arc,
    };

    #[derive(Debug, Default)]
    pub struct FakeSchedulerState {
        pub next_id: u64,
        pub scheduled: Vec<(EventId, Instant)>,
        pub canceled: Vec<EventId>,
    }

    /// Hands out increasing ids. Clones share state so tests can inspect a scheduler after moving
    /// it into a timer.
    #[derive(Clone, Default)]
    pub struct FakeScheduler {
        pub state: Arc<Mutex<FakeSchedulerState>>,
    }

    impl FakeScheduler {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Scheduler for FakeScheduler {
        fn schedule(&mut self, deadline: Instant) -> EventId {
            let mut state = self.state.lock();
            state.next_id += 1;
            let id = EventId(state.next_id);
            state.scheduled.push((id, deadline));
            id
        }

        fn cancel(&mut self, id: EventId) {
            self.state.lock().canceled.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_cancel_event() {
        #[derive(PartialEq, Eq, Debug, Hash)]
        struct FooEvent(u8);

        let fake_scheduler = FakeScheduler::new();

        // Verify event triggers no more than once.
        let mut timer = Timer::<FooEvent>::new(Box::new(fake_scheduler.clone()));
        let deadline = Instant::now() + Duration::from_nanos(5);
        let event_id = timer.schedule_event(deadline, FooEvent(8));
        assert_eq!(timer.triggered(&event_id), Some(FooEvent(8)));
        assert_eq!(timer.triggered(&event_id), None);

        // Verify event does not trigger if it was canceled.
        let event_id = timer.schedule_event(deadline, FooEvent(9));
        timer.cancel_event(event_id);
        assert_eq!(timer.triggered(&event_id), None);
        assert_eq!(fake_scheduler.state.lock().canceled, vec![event_id]);

        // Verify multiple events can be scheduled and canceled.
        let event_id_1 = timer.schedule_event(deadline, FooEvent(8));
        let event_id_2 = timer.schedule_event(deadline, FooEvent(9));
        let event_id_3 = timer.schedule_event(deadline, FooEvent(10));
        timer.cancel_event(event_id_2);
        assert_eq!(timer.triggered(&event_id_2), None);
        assert_eq!(timer.triggered(&event_id_3), Some(FooEvent(10)));
        assert_eq!(timer.triggered(&event_id_1), Some(FooEvent(8)));
    }

    #[test]
    fn cancel_all() {
        let fake_scheduler = FakeScheduler::new();
        let mut timer = Timer::<_>::new(Box::new(fake_scheduler.clone()));
        let deadline = Instant::now() + Duration::from_nanos(5);

        let event_id_1 = timer.schedule_event(deadline, 8);
        let event_id_2 = timer.schedule_event(deadline, 9);
        let event_id_3 = timer.schedule_event(deadline, 10);
        assert_eq!(timer.pending(), 3);
        timer.cancel_all();
        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.triggered(&event_id_1), None);
        assert_eq!(timer.triggered(&event_id_2), None);
        assert_eq!(timer.triggered(&event_id_3), None);
        assert_eq!(fake_scheduler.state.lock().canceled.len(), 3);
    }

    #[test]
    fn schedule_after_uses_future_deadline() {
        let fake_scheduler = FakeScheduler::new();
        let mut timer = Timer::<_>::new(Box::new(fake_scheduler.clone()));
        let before = Instant::now();
        timer.schedule_after(Duration::from_secs(5), ());
        let state = fake_scheduler.state.lock();
        assert_eq!(state.scheduled.len(), 1);
        assert!(state.scheduled[0].1 >= before + Duration::from_secs(5));
    }
}
