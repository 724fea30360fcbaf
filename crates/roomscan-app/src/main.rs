//! RoomScan 命令行入口
//! 读取捕获会话导出的房间 JSON，生成元数据与平面图并写入扫描目录

mod config;

use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use config::{is_valid_margin, is_valid_scale, ExportConfig};
use roomscan_file::{
    load_captured_room, ArtifactStore, FloorplanStyle, RoomExporter, ScanId, ScanInfo,
};

const USAGE: &str = "usage: roomscan <capture.json> [--scan-id ID] [--out DIR] \
[--scale N] [--margin N] [--room-name NAME] [--room-type TYPE] [--user-id ID] [--device MODEL]";

/// 命令行参数
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    input: PathBuf,
    scan_id: Option<String>,
    out: Option<PathBuf>,
    scale: Option<f64>,
    margin: Option<f64>,
    room_name: Option<String>,
    room_type: Option<String>,
    user_id: Option<String>,
    device: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut input = None;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") {
            if input.replace(PathBuf::from(&arg)).is_some() {
                bail!("unexpected argument: {}\n{}", arg, USAGE);
            }
            continue;
        }

        let value = iter
            .next()
            .ok_or_else(|| anyhow!("missing value for {}\n{}", arg, USAGE))?;
        match arg.as_str() {
            "--scan-id" => parsed.scan_id = Some(value),
            "--out" => parsed.out = Some(PathBuf::from(value)),
            "--scale" => parsed.scale = Some(parse_number(&arg, &value, is_valid_scale)?),
            "--margin" => parsed.margin = Some(parse_number(&arg, &value, is_valid_margin)?),
            "--room-name" => parsed.room_name = Some(value),
            "--room-type" => parsed.room_type = Some(value),
            "--user-id" => parsed.user_id = Some(value),
            "--device" => parsed.device = Some(value),
            _ => bail!("unknown option: {}\n{}", arg, USAGE),
        }
    }

    parsed.input = input.ok_or_else(|| anyhow!("missing capture file\n{}", USAGE))?;
    Ok(parsed)
}

fn parse_number(flag: &str, value: &str, valid: fn(f64) -> bool) -> Result<f64> {
    let number: f64 = value
        .parse()
        .with_context(|| format!("invalid {}: {}", flag, value))?;
    if !valid(number) {
        bail!("invalid {}: {} is out of range", flag, value);
    }
    Ok(number)
}

fn scan_info(args: &CliArgs) -> ScanInfo {
    let mut info = ScanInfo::default();
    if let Some(name) = &args.room_name {
        info.room_name = name.clone();
    }
    if let Some(room_type) = &args.room_type {
        info.room_type = room_type.clone();
    }
    if let Some(user_id) = &args.user_id {
        info.user_id = user_id.clone();
    }
    if let Some(device) = &args.device {
        info.device_model = device.clone();
    }
    info
}

fn run(config: ExportConfig, args: CliArgs) -> Result<PathBuf> {
    let room = load_captured_room(&args.input)
        .with_context(|| format!("failed to load capture {}", args.input.display()))?;

    let style = FloorplanStyle::with_scale_and_margin(
        args.scale.unwrap_or(config.scale),
        args.margin.unwrap_or(config.margin),
    );
    let artifacts = RoomExporter::new(style).export(&room)?;

    let scan_id = match &args.scan_id {
        Some(id) => ScanId::new(id.as_str())?,
        None => ScanId::generate(),
    };
    let store = ArtifactStore::new(args.out.clone().unwrap_or(config.output_dir));

    let saved = artifacts
        .persist_with_manifest(&store, &scan_id, scan_info(&args))
        .with_context(|| format!("failed to save scan {}", scan_id))?;

    info!(
        "Exported scan {}: {:.2} x {:.2} x {:.2}, {} furniture",
        scan_id,
        artifacts.record.dimensions.length,
        artifacts.record.dimensions.width,
        artifacts.record.dimensions.height,
        artifacts.record.furniture.len()
    );

    Ok(saved.scan_dir)
}

fn main() -> Result<()> {
    let config = ExportConfig::from_env();

    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(config.log_level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let args = parse_args(std::env::args().skip(1))?;
    let scan_dir = run(config, args)?;
    println!("{}", scan_dir.display());

    Ok(())
}
