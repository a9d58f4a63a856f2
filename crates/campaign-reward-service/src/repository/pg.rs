//! PostgreSQL 存储实现
//!
//! 持有调用方事务中的连接借用，事务的开启与提交/回滚由调用方负责。
//! 重复完成冲突通过驱动的类型化唯一约束错误加约束名判定，不做错误文本匹配。

use async_trait::async_trait;
use sqlx::{PgConnection, Row};
use tracing::debug;

use crate::error::{Result, RewardError};
use crate::models::{CardRule, NewLedgerEntry, Requirement};

use super::traits::{CompletionInsert, RewardStore};

/// card_completions 表上的唯一约束名，见 migrations/0001_init.sql
const COMPLETION_UNIQUE_CONSTRAINT: &str = "uq_card_completions_seller_campaign_card";

/// PostgreSQL 事务存储
///
/// 生命周期绑定到外部事务连接：一个实例即一个原子工作单元
pub struct PgRewardStore<'t> {
    tx: &'t mut PgConnection,
}

impl<'t> PgRewardStore<'t> {
    pub fn new(tx: &'t mut PgConnection) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl<'t> RewardStore for PgRewardStore<'t> {
    async fn insert_notification(&mut self, user_id: i64, message: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (user_id, message)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(message)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn find_card_rule(
        &mut self,
        campaign_id: i64,
        card_number: i32,
    ) -> Result<Option<CardRule>> {
        let rule = sqlx::query_as::<_, CardRule>(
            r#"
            SELECT id, campaign_id, card_number
            FROM card_rules
            WHERE campaign_id = $1 AND card_number = $2
            "#,
        )
        .bind(campaign_id)
        .bind(card_number)
        .fetch_optional(&mut *self.tx)
        .await?;

        let Some(mut rule) = rule else {
            return Ok(None);
        };

        rule.requirements = sqlx::query_as::<_, Requirement>(
            r#"
            SELECT id, card_rule_id, name, required_quantity
            FROM requirements
            WHERE card_rule_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(rule.id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(Some(rule))
    }

    async fn count_validated_submissions(
        &mut self,
        seller_id: i64,
        requirement_id: i64,
    ) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM sale_submissions
            WHERE seller_id = $1 AND requirement_id = $2 AND status = 'VALIDATED'
            "#,
        )
        .bind(seller_id)
        .bind(requirement_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(count)
    }

    async fn insert_card_completion(
        &mut self,
        seller_id: i64,
        campaign_id: i64,
        card_number: i32,
    ) -> Result<CompletionInsert> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO card_completions (seller_id, campaign_id, card_number)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(seller_id)
        .bind(campaign_id)
        .bind(card_number)
        .fetch_one(&mut *self.tx)
        .await;

        match inserted {
            Ok(row) => Ok(CompletionInsert::Inserted {
                completion_id: row.get("id"),
            }),
            // 仅完成记录键上的唯一冲突才是幂等信号；其他约束冲突照常传播
            Err(sqlx::Error::Database(db))
                if db.is_unique_violation()
                    && db.constraint() == Some(COMPLETION_UNIQUE_CONSTRAINT) =>
            {
                debug!(
                    seller_id,
                    campaign_id, card_number, "完成记录已存在，判定为重复完成冲突"
                );
                Ok(CompletionInsert::AlreadyCompleted)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn insert_ledger_entry(&mut self, entry: &NewLedgerEntry) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO ledger_entries (amount, kind, beneficiary_id, campaign_id, grant_ref, note)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(entry.amount)
        .bind(entry.kind)
        .bind(entry.beneficiary_id)
        .bind(entry.campaign_id)
        .bind(&entry.grant_ref)
        .bind(&entry.note)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(id)
    }

    async fn increment_user_balances(&mut self, user_id: i64, coin_delta: i32) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET coin_balance = coin_balance + $2,
                ranking_coins = ranking_coins + $2,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(coin_delta as i64)
        .execute(&mut *self.tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RewardError::Internal(format!("用户不存在: {user_id}")));
        }

        Ok(())
    }
}
