use std::cell::Cell;

use ggez::input::keyboard::KeyCode;
use tracing::{debug, trace};

use crate::{app::phase::PhaseCell, basic::Dir, stream::Stream};

/// Splits released keys into the start signal and arrow directions,
/// every other key is ignored
pub struct Input {
    keys: Stream<KeyCode>,
    start: Stream<()>,
    arrows: Stream<Dir>,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub const START_KEY: KeyCode = KeyCode::Space;

    pub fn new() -> Self {
        let keys = Stream::new();
        let start = keys.filter_map(|key| (*key == Self::START_KEY).then_some(()));
        let arrows = keys.filter_map(|key| Dir::from_key(*key));
        Self { keys, start, arrows }
    }

    pub fn key_released(&self, key: KeyCode) {
        self.keys.emit(key)
    }

    pub fn start(&self) -> &Stream<()> {
        &self.start
    }

    pub fn arrows(&self) -> &Stream<Dir> {
        &self.arrows
    }
}

/// Arrow directions accepted as manual moves.
///
/// Nothing passes while the game is not playing (dropped, not buffered).
/// Once playing, a direction is dropped only if it is the exact reverse
/// of the last accepted one, for the whole session (a restart does not
/// clear it); repeating a direction is allowed.
pub struct DirectionStream {
    accepted: Stream<Dir>,
}

impl DirectionStream {
    pub fn new(arrows: &Stream<Dir>, phase: &PhaseCell) -> Self {
        let last = Cell::new(None::<Dir>);

        let phase = phase.clone();
        let accepted = arrows.filter(move |&dir| {
            if !phase.is_playing() {
                trace!(?dir, "direction before start dropped");
                return false;
            }
            match last.get() {
                Some(prev) if dir.is_reverse_of(prev) => {
                    trace!(?dir, ?prev, "reversal dropped");
                    false
                }
                _ => {
                    debug!(?dir, "direction accepted");
                    last.set(Some(dir));
                    true
                }
            }
        });

        Self { accepted }
    }

    pub fn stream(&self) -> &Stream<Dir> {
        &self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::phase::Phase;
    use itertools::Itertools;
    use std::{cell::RefCell, rc::Rc};
    use Dir::*;

    struct Harness {
        input: Input,
        phase: PhaseCell,
        accepted: Rc<RefCell<Vec<Dir>>>,
    }

    fn harness() -> Harness {
        let input = Input::new();
        let phase = PhaseCell::default();
        {
            let phase = phase.clone();
            input.start().subscribe(move |_| phase.set(Phase::Playing));
        }
        let directions = DirectionStream::new(input.arrows(), &phase);
        let accepted = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&accepted);
        directions.stream().subscribe(move |dir| sink.borrow_mut().push(*dir));
        Harness { input, phase, accepted }
    }

    fn press(harness: &Harness, keys: &[KeyCode]) {
        for &key in keys {
            harness.input.key_released(key);
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let input = Input::new();
        let starts = Rc::new(Cell::new(0));
        let arrows = Rc::new(Cell::new(0));
        {
            let starts = Rc::clone(&starts);
            input.start().subscribe(move |_| starts.set(starts.get() + 1));
            let arrows = Rc::clone(&arrows);
            input.arrows().subscribe(move |_| arrows.set(arrows.get() + 1));
        }
        for key in [KeyCode::A, KeyCode::Return, KeyCode::Escape, KeyCode::W] {
            input.key_released(key);
        }
        assert_eq!((starts.get(), arrows.get()), (0, 0));

        input.key_released(KeyCode::Space);
        input.key_released(KeyCode::Left);
        input.key_released(KeyCode::Space);
        assert_eq!((starts.get(), arrows.get()), (2, 1));
    }

    #[test]
    fn test_gated_until_start() {
        let harness = harness();
        press(
            &harness,
            &[KeyCode::Right, KeyCode::Right, KeyCode::Space, KeyCode::Up],
        );
        assert!(harness.phase.is_playing());
        assert_eq!(*harness.accepted.borrow(), vec![Up]);
    }

    #[test]
    fn test_first_direction_after_start_always_passes() {
        let harness = harness();
        press(&harness, &[KeyCode::Space, KeyCode::Down]);
        assert_eq!(*harness.accepted.borrow(), vec![Down]);
    }

    #[test]
    fn test_reversal_suppressed_repeat_allowed() {
        let harness = harness();
        press(
            &harness,
            &[
                KeyCode::Space,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Right,
            ],
        );
        assert_eq!(*harness.accepted.borrow(), vec![Left, Left, Up, Right]);
    }

    #[test]
    fn test_no_adjacent_opposites() {
        let harness = harness();
        harness.input.key_released(KeyCode::Space);
        let keys = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];
        // deterministic but irregular key sequence
        for i in 0..500_usize {
            harness.input.key_released(keys[(i * 7 + i / 3) % 4]);
        }

        let accepted = harness.accepted.borrow();
        assert!(accepted.len() > 1);
        for (a, b) in accepted.iter().tuple_windows() {
            assert!(!b.is_reverse_of(*a), "{:?} then {:?}", a, b);
        }
    }

    #[test]
    fn test_reversal_memory_survives_restart() {
        let harness = harness();
        press(&harness, &[KeyCode::Space, KeyCode::Up, KeyCode::Space, KeyCode::Down]);
        assert_eq!(*harness.accepted.borrow(), vec![Up]);

        press(&harness, &[KeyCode::Left, KeyCode::Space, KeyCode::Right]);
        assert_eq!(*harness.accepted.borrow(), vec![Up, Left]);
    }
}
