//! 销售提交实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::SubmissionStatus;

/// 销售提交
///
/// 卖家的一次销售事件，关联到某个卡片要求；
/// 只有状态为已审核通过的提交才计入要求的完成数量
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SaleSubmission {
    pub id: i64,
    /// 卖家 ID
    pub seller_id: i64,
    /// 该笔销售计入的要求 ID
    pub requirement_id: i64,
    /// 提交时服务的卡片编号
    pub card_number_served: i32,
    /// 审核状态
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    /// 审核通过时间（未通过时为空）
    #[sqlx(default)]
    pub validated_at: Option<DateTime<Utc>>,
}

impl SaleSubmission {
    /// 该提交是否已审核通过
    pub fn is_validated(&self) -> bool {
        self.status == SubmissionStatus::Validated
    }
}
