pub mod index;
mod node;
pub mod tst;
pub mod wordlist;
