//! Meta tests enforcing the unit-test mirror of the src tree

mod coverage;
