//! 要求完成度评估
//!
//! 对单条卡片要求执行固定的 count ≥ threshold 判定，纯读操作

use tracing::debug;

use crate::error::Result;
use crate::models::Requirement;
use crate::repository::RewardStore;

/// 要求计数器
///
/// 统计卖家在某要求下已审核通过的提交数，与要求数量比较。
/// 无匹配提交时计数为 0，返回未满足而非错误。
pub struct RequirementCounter;

impl RequirementCounter {
    /// 判定单条要求是否满足
    pub async fn is_satisfied(
        store: &mut dyn RewardStore,
        requirement: &Requirement,
        seller_id: i64,
    ) -> Result<bool> {
        let count = store
            .count_validated_submissions(seller_id, requirement.id)
            .await?;
        let satisfied = count >= i64::from(requirement.required_quantity);

        debug!(
            seller_id,
            requirement_id = requirement.id,
            requirement = %requirement.name,
            count,
            required = requirement.required_quantity,
            satisfied,
            "要求完成度评估"
        );

        Ok(satisfied)
    }
}
