//! 业务服务层
//!
//! - `trigger_processor`: 审批触发入口，编排通知、完成度检查与奖励发放
//! - `completion_checker` / `requirement_counter`: 只读的完成度判定
//! - `reward_applier`: 完成确认后的奖励副作用
//! - `dto`: 触发结果类型

pub mod completion_checker;
pub mod dto;
pub mod requirement_counter;
pub mod reward_applier;
pub mod trigger_processor;

pub use completion_checker::CompletionChecker;
pub use dto::{AppliedReward, ManagerReward, TriggerOutcome};
pub use requirement_counter::RequirementCounter;
pub use reward_applier::RewardApplier;
pub use trigger_processor::TriggerProcessor;
