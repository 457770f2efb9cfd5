// ==========================================
// 前一日上架盘点表生成器 - 命令行入口
// ==========================================
// 用法:
//   putaway-check <上架结果表.xlsx|.csv> [差异明细表|-] [输出目录] [配置文件.json]
//
// 差异明细表为可选，传 "-" 表示跳过；输出目录默认当前目录。
// 运行参数缺省为 k=10, seed=42, 上架量阈值 50，可用 JSON 配置文件覆盖。
// ==========================================

use anyhow::Context;
use putaway_check::config::GeneratorConfig;
use putaway_check::domain::ExclusionSet;
use putaway_check::engine::CheckTableGenerator;
use putaway_check::export::{write_check_table, write_shortage_list};
use putaway_check::importer::{build_exclusion_set, UniversalTableParser};
use putaway_check::logging;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    info!("==================================================");
    info!("{}", putaway_check::APP_NAME);
    info!("系统版本: {}", putaway_check::VERSION);
    info!("==================================================");

    let mut args = std::env::args().skip(1);

    let source_path = args.next().ok_or_else(|| {
        anyhow::anyhow!(
            "缺少源文件参数。用法: putaway-check <上架结果表> [差异明细表|-] [输出目录] [配置文件]"
        )
    })?;

    let diff_path = args.next().filter(|p| p != "-");
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let config_path = args.next();

    // 加载运行参数
    let config = match &config_path {
        Some(path) => {
            GeneratorConfig::from_json_file(path).with_context(|| format!("加载配置失败: {}", path))?
        }
        None => GeneratorConfig::default(),
    };
    info!(
        "运行参数: k={}, seed={}, 上架量阈值={}",
        config.sample_size, config.seed, config.qty_limit
    );

    let parser = UniversalTableParser;

    // 解析源文件（必选）
    let source = parser
        .parse(&source_path)
        .with_context(|| format!("解析上架结果表失败: {}", source_path))?;
    info!("上架结果表: {} ({} 行)", source_path, source.row_count());

    // 解析差异明细表（可选；未提供时排除集为空）
    let exclusions = match &diff_path {
        Some(path) => {
            let diff_table = parser
                .parse(path)
                .with_context(|| format!("解析差异明细表失败: {}", path))?;
            build_exclusion_set(&diff_table)?
        }
        None => {
            info!("未提供差异明细表，跳过差异储位剔除");
            ExclusionSet::empty()
        }
    };

    // 执行生成流程
    let generator = CheckTableGenerator::new(config)?;
    let outcome = generator.generate(&source, &exclusions)?;

    // 抽样不足作为诊断展示，不阻断主输出
    for shortage in &outcome.shortages {
        warn!(
            "抽样不足: {} 实际 {} 条",
            shortage.operator_id, shortage.actual_count
        );
    }

    // 写出结果
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("创建输出目录失败: {}", out_dir.display()))?;

    let date = chrono::Local::now().format("%Y%m%d");
    let check_path = out_dir.join(format!("上架盘点表_{}.csv", date));
    write_check_table(&check_path, &outcome.check_table)?;

    if !outcome.shortages.is_empty() {
        let shortage_path = out_dir.join(format!("抽样不足清单_{}.csv", date));
        write_shortage_list(&shortage_path, &outcome.shortages)?;
    }

    info!(
        "完成: {} 组 / 池 {} 条, 输出 {}",
        outcome.roster_size,
        outcome.pool_size,
        check_path.display()
    );

    Ok(())
}
