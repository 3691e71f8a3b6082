//! 示例应用入口
//!
//! 注册示例组件，初始化注册表，解析控制器并输出 GET 结果。

use clap::Parser;
use di_abstractions::BeanRegistry;
use di_impl::Registry;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn Bean 注册表示例应用")]
struct Args {
    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 日志写到 stderr，stdout 只输出结果
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    let mut registry = Registry::new();
    example_app::register_components(&mut registry);
    for line in example_app::describe_components(&registry) {
        debug!("已注册组件 {}", line);
    }
    registry.init();

    let controller = example_app::resolve_controller(&registry)?;
    info!("解析控制器成功");

    println!("{}", controller.http_get());
    Ok(())
}
