//! 用户（卖家/经理）实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 平台用户
///
/// 卖家与经理共用同一张用户表，经理通过 manager_id 反向引用路由分成。
/// coin_balance 与 ranking_coins 由本引擎只增不减，且始终以相对增量更新。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: i64,
    pub name: String,
    /// 所属经理的用户 ID（无经理时为空，分成被跳过）
    #[sqlx(default)]
    pub manager_id: Option<i64>,
    /// 金币余额
    pub coin_balance: i64,
    /// 排行榜金币（与余额同步递增，独立用于排名展示）
    pub ranking_coins: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Seller {
    /// 该卖家是否有归属经理
    pub fn has_manager(&self) -> bool {
        self.manager_id.is_some()
    }
}
