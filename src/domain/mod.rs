//! Domain model: the calculator's input and result records, the performance
//! tiers and the commission rate table.

pub mod input;
pub mod money;
pub mod rates;
pub mod result;
pub mod tier;
