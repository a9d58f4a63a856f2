//! 通知实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 站内通知
///
/// 本引擎只追加通知（提交审核通过、集卡恭喜），从不读取
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    /// 接收人用户 ID
    pub user_id: i64,
    /// 通知内容
    pub message: String,
    pub created_at: DateTime<Utc>,
}
