use std::cmp::Ordering;

use crate::record::{Operation, active};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Gnome sort: step forward while ordered, swap and step back otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct GnomeSort;

impl SortingStrategy for GnomeSort {
    fn key(&self) -> &'static str {
        "gnome-sort"
    }

    fn name(&self) -> &'static str {
        "Gnome Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Gnome { pos: 0 })
    }
}

struct Gnome {
    pos: usize,
}

impl SortMachine for Gnome {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        if self.pos >= t.len() {
            return Progress::Done;
        }
        if self.pos == 0 {
            self.pos = 1;
            return Progress::Continue;
        }
        let p = self.pos;
        let ord = t.compare(p - 1, p);
        t.emit(Operation::Compare, vec![active([p - 1, p])]);
        if ord == Ordering::Greater {
            t.swap(p - 1, p);
            t.emit(Operation::Swap, vec![active([p - 1, p])]);
            self.pos -= 1;
        } else {
            self.pos += 1;
        }
        Progress::Continue
    }
}
