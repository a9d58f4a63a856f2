//! 卡片完成度判定
//!
//! 将各要求的判定结果合成单张卡片的完成结论，纯读操作

use tracing::{debug, warn};

use crate::error::Result;
use crate::repository::RewardStore;
use crate::service::requirement_counter::RequirementCounter;

/// 完成度检查器
pub struct CompletionChecker;

impl CompletionChecker {
    /// 判定卖家是否已集满指定卡片
    ///
    /// - 卡片规则不存在：该卡片编号永远无法完成，返回 false
    /// - 规则未配置任何要求：视为不可完成（配置错误走日志告警，不走发奖）
    /// - 其余情况：全部要求满足才算完成
    pub async fn is_card_complete(
        store: &mut dyn RewardStore,
        campaign_id: i64,
        card_number: i32,
        seller_id: i64,
    ) -> Result<bool> {
        let Some(rule) = store.find_card_rule(campaign_id, card_number).await? else {
            debug!(campaign_id, card_number, "卡片规则不存在，视为未完成");
            return Ok(false);
        };

        if rule.requirements.is_empty() {
            warn!(
                campaign_id,
                card_number,
                rule_id = rule.id,
                "卡片规则未配置任何要求，视为不可完成"
            );
            return Ok(false);
        }

        for requirement in &rule.requirements {
            if !RequirementCounter::is_satisfied(store, requirement, seller_id).await? {
                debug!(
                    campaign_id,
                    card_number,
                    seller_id,
                    requirement = %requirement.name,
                    "存在未满足的要求，卡片未完成"
                );
                return Ok(false);
            }
        }

        Ok(true)
    }
}
