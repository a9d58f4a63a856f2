//! 奖励服务枚举类型定义
//!
//! 所有枚举都支持数据库（sqlx）和 JSON（serde）序列化

use serde::{Deserialize, Serialize};

/// 销售提交状态
///
/// 只有已审核通过（Validated）的提交才计入卡片要求的完成数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// 待审核 - 已提交，等待运营审核
    #[default]
    Pending,
    /// 已通过 - 审核通过，计入完成数量
    Validated,
    /// 已拒绝 - 审核未通过
    Rejected,
    /// 已取消 - 卖家主动撤回
    Cancelled,
}

impl SubmissionStatus {
    /// 该状态的提交是否计入要求完成数量
    pub fn is_countable(&self) -> bool {
        matches!(self, Self::Validated)
    }
}

/// 财务流水类型
///
/// 区分卖家奖励与经理分成，两者在同一次完成中成对产生
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerKind {
    /// 卖家奖励 - 集满卡片的直接奖励
    Seller,
    /// 经理分成 - 按活动分成比例计提
    Manager,
}
