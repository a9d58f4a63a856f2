//! 内存存储实现
//!
//! 共享同一状态的可克隆句柄，适用于测试和开发环境。
//! 唯一性检查在锁内于插入时刻完成，语义与数据库唯一约束一致；
//! 注意它不提供回滚，仅用于验证引擎的调用行为。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::error::{Result, RewardError};
use crate::models::{
    CardCompletion, CardRule, LedgerEntry, NewLedgerEntry, Notification, SaleSubmission, Seller,
};

use super::traits::{CompletionInsert, RewardStore};

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    card_rules: Vec<CardRule>,
    submissions: Vec<SaleSubmission>,
    completions: Vec<CardCompletion>,
    ledger: Vec<LedgerEntry>,
    sellers: HashMap<i64, Seller>,
    notifications: Vec<Notification>,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// 内存存储
///
/// clone 产生共享同一状态的新句柄，可分发给并发任务模拟多个事务
#[derive(Clone, Default)]
pub struct MemoryRewardStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryRewardStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 数据准备 ====================

    pub fn seed_seller(&self, seller: Seller) {
        self.state.lock().sellers.insert(seller.id, seller);
    }

    pub fn seed_card_rule(&self, rule: CardRule) {
        self.state.lock().card_rules.push(rule);
    }

    pub fn seed_submission(&self, submission: SaleSubmission) {
        self.state.lock().submissions.push(submission);
    }

    // ==================== 状态检查 ====================

    pub fn seller(&self, id: i64) -> Option<Seller> {
        self.state.lock().sellers.get(&id).cloned()
    }

    pub fn notifications_for(&self, user_id: i64) -> Vec<Notification> {
        self.state
            .lock()
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn ledger_entries(&self) -> Vec<LedgerEntry> {
        self.state.lock().ledger.clone()
    }

    pub fn ledger_entries_for(&self, beneficiary_id: i64) -> Vec<LedgerEntry> {
        self.state
            .lock()
            .ledger
            .iter()
            .filter(|e| e.beneficiary_id == beneficiary_id)
            .cloned()
            .collect()
    }

    pub fn completions(&self) -> Vec<CardCompletion> {
        self.state.lock().completions.clone()
    }
}

#[async_trait]
impl RewardStore for MemoryRewardStore {
    async fn insert_notification(&mut self, user_id: i64, message: &str) -> Result<()> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.notifications.push(Notification {
            id,
            user_id,
            message: message.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn find_card_rule(
        &mut self,
        campaign_id: i64,
        card_number: i32,
    ) -> Result<Option<CardRule>> {
        let state = self.state.lock();
        Ok(state
            .card_rules
            .iter()
            .find(|r| r.campaign_id == campaign_id && r.card_number == card_number)
            .cloned())
    }

    async fn count_validated_submissions(
        &mut self,
        seller_id: i64,
        requirement_id: i64,
    ) -> Result<i64> {
        let state = self.state.lock();
        let count = state
            .submissions
            .iter()
            .filter(|s| {
                s.seller_id == seller_id
                    && s.requirement_id == requirement_id
                    && s.status.is_countable()
            })
            .count();
        Ok(count as i64)
    }

    async fn insert_card_completion(
        &mut self,
        seller_id: i64,
        campaign_id: i64,
        card_number: i32,
    ) -> Result<CompletionInsert> {
        // 检查与插入在同一把锁内完成，等价于数据库在插入时刻的约束检查
        let mut state = self.state.lock();
        let exists = state.completions.iter().any(|c| {
            c.seller_id == seller_id && c.campaign_id == campaign_id && c.card_number == card_number
        });
        if exists {
            return Ok(CompletionInsert::AlreadyCompleted);
        }

        let id = state.next_id();
        state.completions.push(CardCompletion {
            id,
            seller_id,
            campaign_id,
            card_number,
            completed_at: Utc::now(),
        });
        Ok(CompletionInsert::Inserted { completion_id: id })
    }

    async fn insert_ledger_entry(&mut self, entry: &NewLedgerEntry) -> Result<i64> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.ledger.push(LedgerEntry {
            id,
            amount: entry.amount,
            kind: entry.kind,
            beneficiary_id: entry.beneficiary_id,
            campaign_id: entry.campaign_id,
            grant_ref: entry.grant_ref.clone(),
            note: entry.note.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn increment_user_balances(&mut self, user_id: i64, coin_delta: i32) -> Result<()> {
        let mut state = self.state.lock();
        let seller = state
            .sellers
            .get_mut(&user_id)
            .ok_or_else(|| RewardError::Internal(format!("用户不存在: {user_id}")))?;
        seller.coin_balance += coin_delta as i64;
        seller.ranking_coins += coin_delta as i64;
        seller.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerKind, SubmissionStatus};

    fn seller(id: i64) -> Seller {
        Seller {
            id,
            name: format!("卖家 {}", id),
            manager_id: None,
            coin_balance: 0,
            ranking_coins: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn submission(seller_id: i64, requirement_id: i64, status: SubmissionStatus) -> SaleSubmission {
        SaleSubmission {
            id: 0,
            seller_id,
            requirement_id,
            card_number_served: 1,
            status,
            submitted_at: Utc::now(),
            validated_at: None,
        }
    }

    #[tokio::test]
    async fn test_completion_unique_per_triple() {
        let mut store = MemoryRewardStore::new();

        let first = store.insert_card_completion(10, 1, 2).await.unwrap();
        assert!(first.is_inserted());

        let second = store.insert_card_completion(10, 1, 2).await.unwrap();
        assert_eq!(second, CompletionInsert::AlreadyCompleted);

        // 不同卡片编号不冲突
        let other_card = store.insert_card_completion(10, 1, 3).await.unwrap();
        assert!(other_card.is_inserted());

        assert_eq!(store.completions().len(), 2);
    }

    #[tokio::test]
    async fn test_count_only_validated() {
        let mut store = MemoryRewardStore::new();
        store.seed_submission(submission(10, 100, SubmissionStatus::Validated));
        store.seed_submission(submission(10, 100, SubmissionStatus::Validated));
        store.seed_submission(submission(10, 100, SubmissionStatus::Pending));
        store.seed_submission(submission(10, 100, SubmissionStatus::Rejected));
        store.seed_submission(submission(11, 100, SubmissionStatus::Validated));

        let count = store.count_validated_submissions(10, 100).await.unwrap();
        assert_eq!(count, 2);

        // 无匹配提交时返回 0 而非错误
        let none = store.count_validated_submissions(10, 999).await.unwrap();
        assert_eq!(none, 0);
    }

    #[tokio::test]
    async fn test_increment_user_balances() {
        let mut store = MemoryRewardStore::new();
        store.seed_seller(seller(10));

        store.increment_user_balances(10, 5).await.unwrap();
        store.increment_user_balances(10, 3).await.unwrap();

        let s = store.seller(10).unwrap();
        assert_eq!(s.coin_balance, 8);
        assert_eq!(s.ranking_coins, 8);
    }

    #[tokio::test]
    async fn test_increment_unknown_user_is_error() {
        let mut store = MemoryRewardStore::new();
        let err = store.increment_user_balances(404, 5).await.unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_ledger_append() {
        let mut store = MemoryRewardStore::new();
        let entry = NewLedgerEntry::seller_reward(
            "100.00".parse().unwrap(),
            10,
            1,
            "ref-1".to_string(),
            2,
        );
        let id = store.insert_ledger_entry(&entry).await.unwrap();
        assert!(id > 0);

        let entries = store.ledger_entries_for(10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, LedgerKind::Seller);
    }
}
