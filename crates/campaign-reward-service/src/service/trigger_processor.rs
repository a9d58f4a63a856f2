//! 审批触发处理
//!
//! 每笔提交转入已审核通过状态时由审批工作流同步调用一次，调用方负责提供
//! 包裹审批本身的事务。流程：审核通过通知 -> 完成度检查 -> （完成时）
//! 落完成记录 + 发放奖励。完成记录的唯一键冲突按"奖励已发放"处理，
//! 静默跳过；其余失败传播并使整个事务（含第一步通知）回滚。

use tracing::{debug, instrument, warn};

use crate::error::{Result, RewardError};
use crate::models::{Campaign, SaleSubmission, Seller};
use crate::repository::{CompletionInsert, RewardStore};
use crate::service::completion_checker::CompletionChecker;
use crate::service::dto::TriggerOutcome;
use crate::service::reward_applier::RewardApplier;

/// 审批触发处理器
pub struct TriggerProcessor;

impl TriggerProcessor {
    /// 处理一次提交审批通过的触发
    ///
    /// 状态机（按 (seller, campaign, card) 三元组）：未完成 -> 已完成已发奖，
    /// 一步完成；"已完成未发奖"不会被持久化观察到，因为完成记录与奖励
    /// 在同一事务内写入。三元组到达终态后不再回退。
    #[instrument(
        skip(store, submission, campaign, seller),
        fields(
            submission_id = submission.id,
            campaign_id = campaign.id,
            seller_id = seller.id,
            card_number = submission.card_number_served,
        )
    )]
    pub async fn process_approval_triggers(
        store: &mut dyn RewardStore,
        submission: &SaleSubmission,
        campaign: &Campaign,
        seller: &Seller,
    ) -> Result<TriggerOutcome> {
        // 契约校验：只接受已审核通过、且归属传入卖家的提交
        if !submission.is_validated() {
            return Err(RewardError::SubmissionNotValidated {
                submission_id: submission.id,
                status: submission.status,
            });
        }
        if submission.seller_id != seller.id {
            return Err(RewardError::SellerMismatch {
                submission_id: submission.id,
                expected: submission.seller_id,
                actual: seller.id,
            });
        }

        // 1. 无条件发送审核通过通知
        let message = format!("您的销售提交已审核通过（活动「{}」）", campaign.name);
        store.insert_notification(seller.id, &message).await?;

        // 2. 完成度检查（纯读）
        let complete = CompletionChecker::is_card_complete(
            store,
            campaign.id,
            submission.card_number_served,
            seller.id,
        )
        .await?;

        if !complete {
            return Ok(TriggerOutcome::CardIncomplete);
        }

        // 3. 尝试落完成记录：唯一约束是并发仲裁者，先提交者发奖，
        //    其余事务在此观察到冲突并成为无副作用的空操作
        match store
            .insert_card_completion(seller.id, campaign.id, submission.card_number_served)
            .await?
        {
            CompletionInsert::Inserted { completion_id } => {
                debug!(completion_id, "完成记录已创建，开始发放奖励");
                let applied = RewardApplier::apply(
                    store,
                    campaign,
                    seller,
                    submission.card_number_served,
                )
                .await?;
                Ok(TriggerOutcome::RewardGranted(applied))
            }
            CompletionInsert::AlreadyCompleted => {
                warn!(
                    seller_id = seller.id,
                    campaign_id = campaign.id,
                    card_number = submission.card_number_served,
                    "重复完成冲突：奖励已由先前或并发事务发放，本次不做奖励写入"
                );
                Ok(TriggerOutcome::AlreadyRewarded)
            }
        }
    }
}
