//! # Fishy
//!
//! Compile a `.fishy` program to `out.c`.
//!

fn main() {
    fishy::term::main();
}
