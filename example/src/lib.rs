//! Consumer example: the checked-in output of running `stprotoc gen` over
//! `canvas.stproto`, plus a small demo binary that round-trips a value.

pub mod generated;
