pub mod block;
pub mod block_completion;
pub mod unit;
