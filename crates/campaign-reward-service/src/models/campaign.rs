//! 活动与卡片规则实体定义

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 销售活动
///
/// 定义一次活动的奖励参数：每张卡片的现金奖励、金币数量与经理分成比例。
/// 单次奖励发放期间视为不可变。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    /// 活动名称
    pub name: String,
    /// 每集满一张卡片奖励给卖家的金额
    pub points_value_per_card: Decimal,
    /// 每集满一张卡片奖励的金币数（同时计入余额与排行榜）
    pub coins_per_card: i32,
    /// 经理分成比例（0-100），按卖家卡片奖励金额计提
    pub manager_percentage: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Campaign {
    /// 活动是否配置了经理分成
    pub fn has_manager_commission(&self) -> bool {
        self.manager_percentage > 0
    }

    /// 计算经理分成金额
    ///
    /// 精确十进制乘除后保留两位小数，中点远离零舍入（商业舍入）
    pub fn manager_amount(&self) -> Decimal {
        (self.points_value_per_card * Decimal::from(self.manager_percentage)
            / Decimal::from(100))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// 卡片规则
///
/// 一个活动可定义多个卡片编号（进度等级），每张卡片由一组要求构成。
/// `requirements` 随规则一并加载，不参与 FromRow 映射。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CardRule {
    pub id: i64,
    pub campaign_id: i64,
    /// 卡片编号，同一活动内唯一
    pub card_number: i32,
    /// 该卡片的全部要求，按定义顺序排列
    #[sqlx(skip)]
    pub requirements: Vec<Requirement>,
}

/// 卡片要求
///
/// 一条阈值条件：对应要求的已审核提交数达到 required_quantity 即满足
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: i64,
    pub card_rule_id: i64,
    /// 要求名称（如产品线名），用于日志与运营排查
    pub name: String,
    /// 所需已审核提交数量（≥1）
    pub required_quantity: i32,
}
