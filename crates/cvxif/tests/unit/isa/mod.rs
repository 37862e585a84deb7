//! ISA helper tests.
