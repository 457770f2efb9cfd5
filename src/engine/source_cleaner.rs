// ==========================================
// 前一日上架盘点表生成器 - 源数据清洗器
// ==========================================
// 职责: 把原始上架结果表过滤为可抽样记录池
// 入池条件: 作业类型=采购进货 / 非退货储区 / 上架量有效且不超阈值
//           / 储位未被差异明细表排除
// ==========================================

use crate::config::GeneratorConfig;
use crate::domain::{ExclusionSet, PutawayTask, RawPutawayRecord};
use crate::engine::error::{GenerateError, GenerateResult};
use crate::importer::{FieldMapper, RawTable};
use tracing::{debug, info};

// ==========================================
// SourceCleaner - 源数据清洗器
// ==========================================
pub struct SourceCleaner {
    /// 作业类型哨兵值
    operation_type: String,

    /// 退货储区号
    rejected_zone: String,

    /// 上架量阈值（<=）
    qty_limit: f64,
}

impl SourceCleaner {
    /// 从运行参数构造清洗器
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            operation_type: config.operation_type.clone(),
            rejected_zone: config.rejected_zone.clone(),
            qty_limit: config.qty_limit,
        }
    }

    /// 清洗源数据表，产出抽样记录池
    ///
    /// # 参数
    /// - table: 解析后的原始上架结果表
    /// - exclusions: 储位排除集（可为空集）
    ///
    /// # 错误
    /// 必要字段缺失时返回 `SchemaError`，并枚举缺失字段；不产生部分结果。
    pub fn clean(
        &self,
        table: &RawTable,
        exclusions: &ExclusionSet,
    ) -> GenerateResult<Vec<PutawayTask>> {
        // 模式校验先于一切数据处理
        let missing = FieldMapper::missing_required_columns(table);
        if !missing.is_empty() {
            return Err(GenerateError::SchemaError { missing });
        }

        let records = FieldMapper::map_table(table);
        let total = records.len();

        let pool: Vec<PutawayTask> = records
            .into_iter()
            .filter_map(|record| self.admit(record, exclusions))
            .collect();

        info!(
            "源数据清洗完成: {} 行 -> {} 行 (排除储位 {} 个)",
            total,
            pool.len(),
            exclusions.len()
        );

        Ok(pool)
    }

    /// 单条记录入池判定（全部条件满足才入池）
    fn admit(&self, record: RawPutawayRecord, exclusions: &ExclusionSet) -> Option<PutawayTask> {
        // 作业类型必须等于哨兵值
        if record.operation_type.as_deref() != Some(self.operation_type.as_str()) {
            return None;
        }

        // 退货储区剔除（储区号缺失不视为退货储区）
        if record.zone_id.as_deref() == Some(self.rejected_zone.as_str()) {
            return None;
        }

        // 上架量必须可解析、有限且不超过阈值
        let quantity = record.quantity?;
        if !quantity.is_finite() || quantity > self.qty_limit {
            return None;
        }

        // 储位编码必须存在且未被排除
        let location_code = record.location_code?;
        if exclusions.contains(&location_code) {
            debug!("行 {} 储位 {} 在差异明细表中，剔除", record.row_number, location_code);
            return None;
        }

        Some(PutawayTask {
            row_id: record.row_number,
            operator_id: record.operator_id,
            location_code,
            quantity,
        })
    }
}
