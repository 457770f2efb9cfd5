// ==========================================
// 前一日上架盘点表生成器 - 导入层
// ==========================================
// 职责: 外部表格数据导入,生成内部数据
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod diff_table;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use diff_table::{build_exclusion_set, detect_location_column};
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, RawTable, TableParser, UniversalTableParser};
