use crate::{
    app::phase::PhaseCell,
    basic::Dir,
    stream::{Latest, Stream},
};

/// Re-emits the latest accepted direction on every timer tick while the
/// game is playing, ticks before any direction was accepted produce nothing
pub struct TickStream {
    directions: Stream<Dir>,
}

impl TickStream {
    pub fn new(ticks: &Stream<u64>, accepted: &Stream<Dir>, phase: &PhaseCell) -> Self {
        let latest_dir: Latest<Dir> = accepted.hold();
        let phase = phase.clone();
        let directions = ticks
            .filter(move |_| phase.is_playing())
            .with_latest_from(&latest_dir, |_, dir| *dir);
        Self { directions }
    }

    pub fn stream(&self) -> &Stream<Dir> {
        &self.directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::phase::Phase;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_samples_latest_direction() {
        let ticks = Stream::new();
        let accepted = Stream::new();
        let phase = PhaseCell::default();
        phase.set(Phase::Playing);
        let tick_stream = TickStream::new(&ticks, &accepted, &phase);
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&seen);
        tick_stream.stream().subscribe(move |dir| sink.borrow_mut().push(*dir));

        ticks.emit(0);
        accepted.emit(Dir::Left);
        ticks.emit(1);
        ticks.emit(2);
        accepted.emit(Dir::Up);
        ticks.emit(3);
        phase.set(Phase::Menu);
        ticks.emit(4);
        phase.set(Phase::Playing);
        ticks.emit(5);
        assert_eq!(*seen.borrow(), vec![Dir::Left, Dir::Left, Dir::Up, Dir::Up]);
    }
}
