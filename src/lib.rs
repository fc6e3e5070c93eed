pub mod command;
pub mod controller;
pub mod history;
pub mod model;
pub mod notify;
pub mod recent;
pub mod store;
pub mod view;

mod utils;

use std::cell::RefCell;
use std::cmp::min;
use std::io::Stdout;
use std::ops::{AddAssign, SubAssign};
use std::rc::Rc;

use termion::raw::RawTerminal;
use termion::screen::AlternateScreen;

pub type RawStdout = Rc<RefCell<AlternateScreen<RawTerminal<Stdout>>>>;

// An index that can never leave the range 0..=max, whatever arithmetic is
// thrown at it. Used for the list selection in the language view.
#[derive(Clone, Copy, Debug)]
pub struct BoundedIndex {
    value: usize,
    max: usize,
}

impl BoundedIndex {
    pub fn new(value: usize, max: usize) -> BoundedIndex {
        let mut ret = BoundedIndex { value, max };
        ret.adjust();
        ret
    }

    pub fn set_value(&mut self, new_value: usize) {
        self.value = new_value;
        self.adjust();
    }

    pub fn set_maximum(&mut self, max: usize) {
        self.max = max;
        self.adjust();
    }

    fn adjust(&mut self) {
        self.value = min(self.value, self.max);
    }
}

impl AddAssign<usize> for BoundedIndex {
    fn add_assign(&mut self, other: usize) {
        self.value = self.value.saturating_add(other);
        self.adjust();
    }
}

impl SubAssign<usize> for BoundedIndex {
    fn sub_assign(&mut self, other: usize) {
        self.value = self.value.saturating_sub(other);
        self.adjust();
    }
}

impl From<BoundedIndex> for usize {
    fn from(mut convertee: BoundedIndex) -> Self {
        convertee.adjust();
        convertee.value
    }
}

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
