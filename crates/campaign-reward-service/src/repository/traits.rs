//! 存储 Trait 定义
//!
//! 把调用方事务建模为显式传入的能力对象：一个 `RewardStore` 实例对应一个
//! 原子工作单元，通过同一实例执行的全部操作要么一起提交、要么一起回滚。
//! 服务层依赖此抽象而非具体实现，便于 mock 测试与内存实现。

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CardRule, NewLedgerEntry};

/// 完成记录插入结果
///
/// 唯一键冲突不是错误：它是并发安全信号，表示同一 (seller, campaign, card)
/// 的奖励已由先前或并发的事务发放。其余写失败以 `RewardError` 传播。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionInsert {
    /// 插入成功，本事务获得发奖资格
    Inserted { completion_id: i64 },
    /// 唯一键已存在，奖励已被其他事务发放
    AlreadyCompleted,
}

impl CompletionInsert {
    /// 本事务是否赢得了发奖资格
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// 事务作用域内的存储操作接口
///
/// 方法均为 `&mut self`：实例即事务，不允许跨事务复用。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RewardStore: Send {
    /// 追加一条站内通知
    async fn insert_notification(&mut self, user_id: i64, message: &str) -> Result<()>;

    /// 查找卡片规则（含全部要求），不存在时返回 None
    async fn find_card_rule(
        &mut self,
        campaign_id: i64,
        card_number: i32,
    ) -> Result<Option<CardRule>>;

    /// 统计卖家在某要求下已审核通过的提交数量
    async fn count_validated_submissions(
        &mut self,
        seller_id: i64,
        requirement_id: i64,
    ) -> Result<i64>;

    /// 尝试插入完成记录
    ///
    /// 唯一键冲突必须在插入时刻同步检测并返回 `AlreadyCompleted`，
    /// 而非延迟到提交或后续读取
    async fn insert_card_completion(
        &mut self,
        seller_id: i64,
        campaign_id: i64,
        card_number: i32,
    ) -> Result<CompletionInsert>;

    /// 追加一条财务流水，返回新记录 ID
    async fn insert_ledger_entry(&mut self, entry: &NewLedgerEntry) -> Result<i64>;

    /// 以相对增量更新用户金币余额与排行榜金币
    ///
    /// 必须表达为 SET x = x + δ 形式，保证不同完成并发累加同一用户时不丢更新
    async fn increment_user_balances(&mut self, user_id: i64, coin_delta: i32) -> Result<()>;
}
