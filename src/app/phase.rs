use std::{cell::Cell, rc::Rc};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Phase {
    /// Before the first start signal
    Menu,
    Playing,
}

/// Lifecycle flag shared by every gated component
#[derive(Clone)]
pub struct PhaseCell(Rc<Cell<Phase>>);

impl Default for PhaseCell {
    fn default() -> Self {
        Self(Rc::new(Cell::new(Phase::Menu)))
    }
}

impl PhaseCell {
    pub fn get(&self) -> Phase {
        self.0.get()
    }

    pub fn set(&self, phase: Phase) {
        self.0.set(phase)
    }

    pub fn is_playing(&self) -> bool {
        self.get() == Phase::Playing
    }
}
