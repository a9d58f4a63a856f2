//! 领域模型定义
//!
//! 活动、卡片规则、销售提交、完成记录、财务流水、用户与通知

mod campaign;
mod completion;
mod enums;
mod ledger;
mod notification;
mod seller;
mod submission;

pub use campaign::{Campaign, CardRule, Requirement};
pub use completion::CardCompletion;
pub use enums::{LedgerKind, SubmissionStatus};
pub use ledger::{LedgerEntry, NewLedgerEntry};
pub use notification::Notification;
pub use seller::Seller;
pub use submission::SaleSubmission;
