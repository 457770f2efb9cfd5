// ==========================================
// 前一日上架盘点表生成器 - CSV 导出实现
// ==========================================
// 职责: 盘点表 / 抽样不足清单 写出为 UTF-8 CSV
// 约定: 单元格样式不在职责内,只输出数据
// ==========================================

use crate::domain::{CheckTable, ShortageRecord};
use csv::WriterBuilder;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写出失败: {0}")]
    CsvWriteError(#[from] csv::Error),

    #[error("文件写入失败: {0}")]
    FileWriteError(#[from] std::io::Error),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

/// 写出盘点表
///
/// 列: 上架员, 储位编码_1..k, 盘点内容列。
/// 空槽位写出为空单元格。
pub fn write_check_table<P: AsRef<Path>>(path: P, table: &CheckTable) -> ExportResult<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new().from_path(path)?;

    writer.write_record(table.headers())?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(table.sample_size + 2);
        record.push(row.operator_id.clone());
        for slot in &row.slots {
            record.push(slot.clone().unwrap_or_default());
        }
        record.push(row.summary.clone());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    info!("盘点表已写出: {} ({} 行)", path.display(), table.rows.len());

    Ok(())
}

/// 写出抽样不足清单
///
/// 列: 上架员, 实际抽样条数。输入顺序（实际条数升序）原样保留。
pub fn write_shortage_list<P: AsRef<Path>>(
    path: P,
    shortages: &[ShortageRecord],
) -> ExportResult<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new().from_path(path)?;

    writer.write_record(["上架员", "实际抽样条数"])?;

    for shortage in shortages {
        writer.write_record([
            shortage.operator_id.as_str(),
            &shortage.actual_count.to_string(),
        ])?;
    }

    writer.flush()?;
    info!(
        "抽样不足清单已写出: {} ({} 行)",
        path.display(),
        shortages.len()
    );

    Ok(())
}
