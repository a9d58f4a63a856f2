//! 数据库存储层
//!
//! `RewardStore` 是事务作用域的存储抽象；`PgRewardStore` 绑定 PostgreSQL
//! 事务连接，`MemoryRewardStore` 为测试/开发提供同语义的内存实现。

mod memory;
mod pg;
mod traits;

pub use memory::MemoryRewardStore;
pub use pg::PgRewardStore;
pub use traits::{CompletionInsert, RewardStore};

#[cfg(test)]
pub use traits::MockRewardStore;
