//! 财务流水实体定义
//!
//! 记录每一笔奖励发放，只追加不修改，作为财务报表的数据来源

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::LedgerKind;

/// 财务流水记录
///
/// 一笔已发放的奖励金额，不可变。同一次卡片完成产生的卖家奖励与经理分成
/// 共享同一个 grant_ref，便于成对追溯。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: i64,
    /// 发放金额
    pub amount: Decimal,
    /// 流水类型（卖家奖励 / 经理分成）
    pub kind: LedgerKind,
    /// 受益人用户 ID
    pub beneficiary_id: i64,
    /// 所属活动 ID
    pub campaign_id: i64,
    /// 同一次完成的流水对共享的关联引用
    pub grant_ref: String,
    /// 备注
    #[sqlx(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 待写入的流水记录
///
/// 插入载荷，ID 与时间戳由存储生成
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLedgerEntry {
    pub amount: Decimal,
    pub kind: LedgerKind,
    pub beneficiary_id: i64,
    pub campaign_id: i64,
    pub grant_ref: String,
    pub note: Option<String>,
}

impl NewLedgerEntry {
    /// 创建卖家卡片奖励流水
    pub fn seller_reward(
        amount: Decimal,
        seller_id: i64,
        campaign_id: i64,
        grant_ref: String,
        card_number: i32,
    ) -> Self {
        Self {
            amount,
            kind: LedgerKind::Seller,
            beneficiary_id: seller_id,
            campaign_id,
            grant_ref,
            note: Some(format!("集满卡片 {} 奖励", card_number)),
        }
    }

    /// 创建经理分成流水
    pub fn manager_commission(
        amount: Decimal,
        manager_id: i64,
        campaign_id: i64,
        grant_ref: String,
        seller_id: i64,
        card_number: i32,
    ) -> Self {
        Self {
            amount,
            kind: LedgerKind::Manager,
            beneficiary_id: manager_id,
            campaign_id,
            grant_ref,
            note: Some(format!("卖家 {} 集满卡片 {} 的分成", seller_id, card_number)),
        }
    }
}
