//! 奖励发放
//!
//! 对已确认的卡片完成执行全部奖励副作用：卖家流水、可选的经理分成流水、
//! 金币余额递增、恭喜通知。四步共享调用方事务，任一失败整体回滚，
//! 不存在可单独重试的步骤。

use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Campaign, NewLedgerEntry, Seller};
use crate::repository::RewardStore;
use crate::service::dto::{AppliedReward, ManagerReward};

/// 奖励发放器
///
/// 仅允许在完成记录已于同一事务内落库之后调用
pub struct RewardApplier;

impl RewardApplier {
    /// 发放一次卡片完成的全部奖励
    pub async fn apply(
        store: &mut dyn RewardStore,
        campaign: &Campaign,
        seller: &Seller,
        card_number: i32,
    ) -> Result<AppliedReward> {
        let grant_ref = Uuid::new_v4().to_string();

        // 1. 卖家奖励流水
        let seller_entry = NewLedgerEntry::seller_reward(
            campaign.points_value_per_card,
            seller.id,
            campaign.id,
            grant_ref.clone(),
            card_number,
        );
        store.insert_ledger_entry(&seller_entry).await?;

        // 2. 经理分成流水：需要活动配置了分成比例且卖家有归属经理
        let manager_reward = if campaign.has_manager_commission()
            && let Some(manager_id) = seller.manager_id
        {
            let amount = campaign.manager_amount();
            let entry = NewLedgerEntry::manager_commission(
                amount,
                manager_id,
                campaign.id,
                grant_ref.clone(),
                seller.id,
                card_number,
            );
            store.insert_ledger_entry(&entry).await?;
            Some(ManagerReward { manager_id, amount })
        } else {
            None
        };

        // 3. 金币余额与排行榜金币递增
        store
            .increment_user_balances(seller.id, campaign.coins_per_card)
            .await?;

        // 4. 恭喜通知
        let message = format!(
            "恭喜！您已集满活动「{}」的卡片 {}，奖励已发放",
            campaign.name, card_number
        );
        store.insert_notification(seller.id, &message).await?;

        info!(
            seller_id = seller.id,
            campaign_id = campaign.id,
            card_number,
            grant_ref = %grant_ref,
            seller_amount = %campaign.points_value_per_card,
            coins = campaign.coins_per_card,
            with_manager_commission = manager_reward.is_some(),
            "卡片奖励已发放"
        );

        Ok(AppliedReward {
            grant_ref,
            card_number,
            seller_amount: campaign.points_value_per_card,
            manager_reward,
            coins_granted: campaign.coins_per_card,
        })
    }
}
