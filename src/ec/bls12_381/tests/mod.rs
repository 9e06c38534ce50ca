//! BLS12-381 field-tower test suite.

mod field;
mod tower;
