// ==========================================
// 前一日上架盘点表生成器 - 字段映射器实现
// ==========================================
// 职责: 源列名 -> 标准字段映射 + 宽松类型转换
// 约定: 上架量解析失败映射为 None,由清洗器过滤,不报错
// ==========================================

use crate::domain::RawPutawayRecord;
use crate::importer::file_parser::RawTable;
use std::collections::HashMap;
use tracing::debug;

/// 必要逻辑字段与其可接受的列名（首个为标准列名）
///
/// 列名角色固定，但不同导出模板的叫法略有差异。
const REQUIRED_COLUMNS: [(&str, &[&str]); 5] = [
    ("作业类型", &["作业类型"]),
    ("储区号", &["储区号", "储区"]),
    ("上架量", &["上架量", "上架数量"]),
    ("储位编码", &["储位编码", "储位"]),
    ("上架员", &["上架员", "上架员账号"]),
];

pub struct FieldMapper;

impl FieldMapper {
    /// 检查表头是否包含全部必要字段
    ///
    /// # 返回
    /// 缺失字段的标准列名列表（空表示齐全）
    pub fn missing_required_columns(table: &RawTable) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|(_, aliases)| !aliases.iter().any(|a| table.has_column(a)))
            .map(|(canonical, _)| canonical.to_string())
            .collect()
    }

    /// 将整张原始表映射为标准记录
    ///
    /// 行号从 1 开始（不含表头），作为记录的稳定标识。
    pub fn map_table(table: &RawTable) -> Vec<RawPutawayRecord> {
        table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| Self::map_row(row, idx + 1))
            .collect()
    }

    /// 映射单行
    pub fn map_row(row: &HashMap<String, String>, row_number: usize) -> RawPutawayRecord {
        RawPutawayRecord {
            operation_type: Self::get_string(row, "作业类型"),
            zone_id: Self::get_string(row, "储区号"),
            quantity: Self::parse_f64_lenient(row, "上架量", row_number),
            location_code: Self::get_string(row, "储位编码"),
            operator_id: Self::get_string(row, "上架员"),
            row_number,
        }
    }

    /// 提取字符串字段（TRIM，空白归一化为 None），支持列名别名
    fn get_string(row: &HashMap<String, String>, key: &str) -> Option<String> {
        let aliases: &[&str] = REQUIRED_COLUMNS
            .iter()
            .find(|(canonical, _)| *canonical == key)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[]);

        for alias in aliases {
            if let Some(v) = row.get(*alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// 宽松解析浮点数
    ///
    /// 解析失败返回 None 并记录 debug 日志，该行随后被清洗器过滤。
    fn parse_f64_lenient(
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> Option<f64> {
        let value = Self::get_string(row, key)?;

        match value.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                debug!("行 {} 字段 {} 无法解析为数值: {}", row_number, key, value);
                None
            }
        }
    }
}
