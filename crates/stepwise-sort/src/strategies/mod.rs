//! Every sorting strategy, grouped by family.

pub mod bubble;
pub mod bucket;
pub mod distribution;
pub mod gnome;
pub mod heap;
pub mod insertion;
pub mod intro;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;
