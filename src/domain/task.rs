// ==========================================
// 前一日上架盘点表生成器 - 上架任务实体
// ==========================================
// 职责: 源数据行的领域表示
// ==========================================

use serde::{Deserialize, Serialize};

/// 字段映射后的原始上架记录（清洗前）
///
/// 字符串字段均已 TRIM，空白归一化为 None。
/// 上架量解析失败时为 None（按过滤处理，不报错）。
#[derive(Debug, Clone, PartialEq)]
pub struct RawPutawayRecord {
    /// 作业类型
    pub operation_type: Option<String>,

    /// 储区号
    pub zone_id: Option<String>,

    /// 上架量（无法解析为数值时为 None）
    pub quantity: Option<f64>,

    /// 储位编码
    pub location_code: Option<String>,

    /// 上架员账号
    pub operator_id: Option<String>,

    /// 源文件行号（1 起始，不含表头）
    pub row_number: usize,
}

/// 清洗后进入抽样池的上架任务记录
///
/// `row_id` 为源文件中的稳定行位置，抽样按 row_id 做一次性消费，
/// 保证同一条记录在一次运行内至多被抽中一次。
///
/// 上架员缺失的记录仍可进入抽样池（对任何盘点组都是他人作业），
/// 但不会出现在盘点组名册中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutawayTask {
    /// 稳定行标识（源文件行位置）
    pub row_id: usize,

    /// 上架员账号（可缺失）
    pub operator_id: Option<String>,

    /// 储位编码
    pub location_code: String,

    /// 上架量
    pub quantity: f64,
}
