use std::rc::Rc;

use yew::Reducible;

/// Cyclic position over a fixed-length list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored so the
    /// position always points at a real entry.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            log::warn!("ignoring carousel jump to {} of {}", index, self.len);
            self
        }
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(index) => self.go_to(index),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}
