//! 服务层数据传输对象

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 经理分成明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerReward {
    pub manager_id: i64,
    pub amount: Decimal,
}

/// 一次奖励发放的结果明细
///
/// 供调用方与日志使用：发了多少钱、分成给谁、加了多少金币
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedReward {
    /// 关联本次完成的两条流水的共享引用
    pub grant_ref: String,
    pub card_number: i32,
    /// 卖家奖励金额
    pub seller_amount: Decimal,
    /// 经理分成（无分成比例或无归属经理时为空）
    pub manager_reward: Option<ManagerReward>,
    /// 发放的金币数
    pub coins_granted: i32,
}

/// 单次审批触发的处理结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerOutcome {
    /// 卡片尚未集满，仅发送了审核通过通知
    CardIncomplete,
    /// 本次触发完成了卡片并发放了奖励
    RewardGranted(AppliedReward),
    /// 完成记录已存在，奖励已由先前或并发事务发放，本次未做任何奖励写入
    AlreadyRewarded,
}

impl TriggerOutcome {
    /// 本次触发是否发放了奖励
    pub fn is_reward_granted(&self) -> bool {
        matches!(self, Self::RewardGranted(_))
    }

    /// 获取发放明细（未发放时为空）
    pub fn reward(&self) -> Option<&AppliedReward> {
        match self {
            Self::RewardGranted(applied) => Some(applied),
            _ => None,
        }
    }
}
