// Domain layer: plain values, no I/O.

pub mod model;
