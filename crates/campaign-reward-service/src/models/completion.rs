//! 卡片完成记录实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 卡片完成记录
///
/// 表示"卖家 X 在活动 C 中集满了卡片 N"这一事实。
/// (seller_id, campaign_id, card_number) 上的数据库唯一约束是防止重复发奖的
/// 并发安全机制：记录至多创建一次，本引擎从不更新或删除它。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CardCompletion {
    pub id: i64,
    pub seller_id: i64,
    pub campaign_id: i64,
    pub card_number: i32,
    pub completed_at: DateTime<Utc>,
}
