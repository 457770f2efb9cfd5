// ==========================================
// 前一日上架盘点表生成器 - 差异明细表解析
// ==========================================
// 职责: 定位差异明细表中的储位列,构建储位排除集
// 约定: 差异明细表为可选输入;一旦提供但无法定位储位列,
//       视为致命配置错误,在核心流程运行前抛出
// ==========================================

use crate::domain::ExclusionSet;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawTable;
use tracing::info;

/// 精确优先的储位列名
const EXACT_COLUMN: &str = "储位列";

/// 候选储位列名（按优先级）
const CANDIDATE_COLUMNS: [&str; 5] = ["储位", "储位编码", "储位号", "库位", "库位编码"];

/// 兜底匹配的领域词（列名包含其一即可）
const DOMAIN_TOKENS: [&str; 2] = ["储位", "库位"];

/// 定位差异明细表中承载储位编码的列
///
/// # 解析顺序
/// 1. 精确匹配 "储位列"
/// 2. 候选列名逐一精确匹配
/// 3. 首个列名包含 储位/库位 的列
///
/// # 错误
/// 三步均未命中时返回 `DiffLocationColumnNotFound`，并列出现有列名。
pub fn detect_location_column(table: &RawTable) -> ImportResult<String> {
    if table.has_column(EXACT_COLUMN) {
        return Ok(EXACT_COLUMN.to_string());
    }

    for cand in CANDIDATE_COLUMNS {
        if table.has_column(cand) {
            return Ok(cand.to_string());
        }
    }

    if let Some(col) = table
        .headers
        .iter()
        .find(|h| DOMAIN_TOKENS.iter().any(|t| h.contains(t)))
    {
        return Ok(col.clone());
    }

    Err(ImportError::DiffLocationColumnNotFound {
        columns: table.headers.clone(),
    })
}

/// 从差异明细表构建储位排除集
///
/// 空值/空白值被丢弃，重复储位自动去重。
pub fn build_exclusion_set(table: &RawTable) -> ImportResult<ExclusionSet> {
    let loc_col = detect_location_column(table)?;

    let codes = table
        .rows
        .iter()
        .filter_map(|row| row.get(&loc_col))
        .cloned();

    let set = ExclusionSet::from_codes(codes);
    info!("差异明细表解析完成: 储位列={}, 排除储位 {} 个", loc_col, set.len());

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table_with(headers: &[&str], rows: Vec<Vec<(&str, &str)>>) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect::<HashMap<String, String>>()
                })
                .collect(),
        }
    }

    #[test]
    fn test_exact_column_wins() {
        let table = table_with(&["储位编码", "储位列"], vec![]);
        assert_eq!(detect_location_column(&table).unwrap(), "储位列");
    }

    #[test]
    fn test_candidate_columns_in_priority_order() {
        let table = table_with(&["备注", "库位", "储位"], vec![]);
        // "储位" 在候选列表中优先于 "库位"
        assert_eq!(detect_location_column(&table).unwrap(), "储位");
    }

    #[test]
    fn test_substring_fallback() {
        let table = table_with(&["差异储位编号", "数量"], vec![]);
        assert_eq!(detect_location_column(&table).unwrap(), "差异储位编号");
    }

    #[test]
    fn test_no_location_column_is_fatal() {
        let table = table_with(&["数量", "备注"], vec![]);

        let err = detect_location_column(&table).unwrap_err();
        match err {
            ImportError::DiffLocationColumnNotFound { columns } => {
                assert_eq!(columns, vec!["数量", "备注"]);
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    }

    #[test]
    fn test_build_exclusion_set_trims_and_dedupes() {
        let table = table_with(
            &["储位编码"],
            vec![
                vec![("储位编码", " A-01-01 ")],
                vec![("储位编码", "A-01-01")],
                vec![("储位编码", "")],
                vec![("储位编码", "B-02-03")],
            ],
        );

        let set = build_exclusion_set(&table).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("A-01-01"));
        assert!(set.contains("B-02-03"));
    }
}
