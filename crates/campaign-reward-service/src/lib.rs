//! 活动奖励服务
//!
//! 卡片（cartela）完成判定与奖励发放引擎。提交审批工作流在每笔提交
//! 转入已审核通过状态时，于自身事务内调用本引擎：引擎判定卖家是否恰好
//! 集满一张卡片，并在集满时恰好一次地发放现金奖励、可选的经理分成、
//! 金币余额递增与通知。
//!
//! ## 核心保证
//!
//! - **恰好一次发奖**：同一 (seller, campaign, card) 至多产生一条完成记录
//!   与一对流水，由完成记录上的数据库唯一约束在并发下仲裁
//! - **原子性**：完成记录与全部奖励副作用在调用方事务内一起提交或回滚，
//!   不存在"已完成未发奖"的可观察中间态
//! - **幂等回放**：重复触发只产生审核通过通知，不改变流水与余额
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 事务作用域的存储抽象及 PostgreSQL / 内存实现
//! - `service`: 业务服务层（触发处理、完成度判定、奖励发放）

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{Result, RewardError};
pub use models::*;
pub use repository::{CompletionInsert, MemoryRewardStore, PgRewardStore, RewardStore};
pub use service::{
    AppliedReward, CompletionChecker, ManagerReward, RequirementCounter, RewardApplier,
    TriggerOutcome, TriggerProcessor,
};
