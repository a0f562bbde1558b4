pub mod alphabet;
pub mod generate;
pub mod wordlist;
