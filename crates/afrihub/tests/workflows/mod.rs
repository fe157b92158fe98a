use super::*;

mod catalog;
mod statistics;
