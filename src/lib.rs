// ==========================================
// 前一日上架盘点表生成器 - 核心库
// ==========================================
// 系统定位: 上架抽检决策支持工具
// 流程: 源数据清洗 -> 盘点组名册 -> 随机抽样 -> 盘点表生成
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - 结果输出
pub mod export;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CheckRow, CheckTable, ExclusionSet, PutawayTask, RawPutawayRecord, SampleAssignment,
    SampleOutcome, ShortageRecord,
};

// 引擎
pub use engine::{
    CheckTableBuilder, CheckTableGenerator, GenerateError, GenerateOutcome, GenerateResult,
    InspectionSampler, RosterBuilder, SourceCleaner,
};

// 导入层
pub use importer::{ImportError, ImportResult, RawTable};

// 配置
pub use config::{ConfigError, GeneratorConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "前一日上架盘点表生成器";
