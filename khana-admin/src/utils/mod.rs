pub mod logger;
pub mod money;

pub use money::{format_money, round_money};
