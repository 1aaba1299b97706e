pub mod targets;
pub mod wordlist;

pub use targets::enumerate_targets;
pub use wordlist::Wordlist;
