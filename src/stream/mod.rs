//! A small single-threaded push-stream toolkit.
//!
//! A [`Stream`] is a hot source: values emitted before a subscriber is
//! attached are not replayed. Sampling is done through [`Latest`], a
//! single-slot holder that a producer keeps up to date and consumers read
//! at their own firing time.

pub use latest::Latest;
pub use timing::{FramePulse, Interval};

mod latest;
mod timing;

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    subscribers: RefCell<Vec<Subscriber<T>>>,
    /// Values waiting to be dispatched, in arrival order
    pending: RefCell<VecDeque<T>>,
    dispatching: Cell<bool>,
}

pub struct Stream<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: 'static> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Stream<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                subscribers: RefCell::new(vec![]),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Delivers `value` to every subscriber in subscription order.
    ///
    /// An emission made while this stream is already dispatching (from
    /// inside one of its own subscribers) is queued and delivered once the
    /// current value has reached all subscribers, so every subscriber sees
    /// values in the order they arrived.
    pub fn emit(&self, value: T) {
        self.inner.pending.borrow_mut().push_back(value);
        if self.inner.dispatching.replace(true) {
            return;
        }

        loop {
            // the RefMut must not outlive this statement, subscribers may emit
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(value) = next else { break };
            let subscribers = self.inner.subscribers.borrow().clone();
            for subscriber in &subscribers {
                subscriber(&value);
            }
        }

        self.inner.dispatching.set(false);
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(f));
    }

    pub fn filter_map<U: 'static>(&self, f: impl Fn(&T) -> Option<U> + 'static) -> Stream<U> {
        let out = Stream::new();
        let sink = out.clone();
        self.subscribe(move |value| {
            if let Some(mapped) = f(value) {
                sink.emit(mapped)
            }
        });
        out
    }

    pub fn map<U: 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Stream<U> {
        self.filter_map(move |value| Some(f(value)))
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Stream<T>
    where
        T: Clone,
    {
        self.filter_map(move |value| predicate(value).then(|| value.clone()))
    }

    /// Union of both sources, each value forwarded as it arrives
    pub fn merge(&self, other: &Stream<T>) -> Stream<T>
    where
        T: Clone,
    {
        let out = Stream::new();
        for source in [self, other] {
            let sink = out.clone();
            source.subscribe(move |value: &T| sink.emit(value.clone()));
        }
        out
    }

    /// Running fold, emits every new accumulator value (but not `seed`)
    pub fn scan<S: Clone + 'static>(
        &self,
        seed: S,
        f: impl Fn(&S, &T) -> S + 'static,
    ) -> Stream<S> {
        let out = Stream::new();
        let sink = out.clone();
        let state = RefCell::new(seed);
        self.subscribe(move |value| {
            let next = f(&*state.borrow(), value);
            state.replace(next.clone());
            sink.emit(next);
        });
        out
    }

    /// Combines each value with whatever `latest` holds at that moment,
    /// values arriving while `latest` is empty are dropped
    pub fn with_latest_from<U: 'static, R: 'static>(
        &self,
        latest: &Latest<U>,
        f: impl Fn(&T, &U) -> R + 'static,
    ) -> Stream<R> {
        let latest = latest.clone();
        self.filter_map(move |value| latest.with(|other| f(value, other)))
    }

    /// Keeps the newest value in a slot, empty until the first emission
    pub fn hold(&self) -> Latest<T>
    where
        T: Clone,
    {
        self.hold_in(Latest::empty())
    }

    /// Keeps the newest value in a slot that starts out holding `initial`
    pub fn hold_with(&self, initial: T) -> Latest<T>
    where
        T: Clone,
    {
        self.hold_in(Latest::new(initial))
    }

    fn hold_in(&self, slot: Latest<T>) -> Latest<T>
    where
        T: Clone,
    {
        let sink = slot.clone();
        self.subscribe(move |value| sink.set(value.clone()));
        slot
    }
}
