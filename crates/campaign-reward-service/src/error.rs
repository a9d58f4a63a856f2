//! 奖励服务错误类型
//!
//! 定义服务层的业务错误和系统错误。
//! 注意：重复完成冲突不是错误，它作为 `CompletionInsert::AlreadyCompleted`
//! 的正常返回值出现（见 repository 模块）。

use thiserror::Error;

use crate::models::SubmissionStatus;

/// 奖励服务错误类型
#[derive(Debug, Error)]
pub enum RewardError {
    // === 业务错误 ===
    #[error("提交状态不允许触发奖励: submission_id={submission_id}, status={status:?}")]
    SubmissionNotValidated {
        submission_id: i64,
        status: SubmissionStatus,
    },

    #[error("提交与卖家不匹配: submission_id={submission_id}, 提交归属 {expected}, 实际传入 {actual}")]
    SellerMismatch {
        submission_id: i64,
        expected: i64,
        actual: i64,
    },

    // === 系统错误 ===
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("内部错误: {0}")]
    Internal(String),

    #[error("参数校验失败: {0}")]
    Validation(String),
}

/// 奖励服务 Result 类型别名
pub type Result<T> = std::result::Result<T, RewardError>;

impl RewardError {
    /// 检查是否为可重试的错误
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// 检查是否为业务错误（非系统错误）
    pub fn is_business_error(&self) -> bool {
        !matches!(self, Self::Database(_) | Self::Internal(_))
    }

    /// 获取错误码（用于上层工作流分类处理）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SubmissionNotValidated { .. } => "SUBMISSION_NOT_VALIDATED",
            Self::SellerMismatch { .. } => "SELLER_MISMATCH",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}
