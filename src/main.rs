use anyhow::{bail, Context, Result};
use std::io::Write;
use std::sync::{Arc, Mutex};
use talava_measure::config::Config;
use talava_measure::measure::{measure_body, BodyReport};
use talava_measure::pose::load_landmarks;

const CONFIG_PATH: &str = "config.toml";

type LogFile = Arc<Mutex<std::io::BufWriter<std::fs::File>>>;

fn open_log_file() -> Result<(LogFile, String)> {
    std::fs::create_dir_all("logs")?;
    let ts = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = format!("logs/measure_{}.log", ts);
    let file = std::fs::File::create(&path)?;
    eprintln!("Log: {}", path);
    Ok((Arc::new(Mutex::new(std::io::BufWriter::new(file))), path))
}

macro_rules! log {
    ($logfile:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        println!("{}", msg);
        if let Some(f) = $logfile.as_ref() {
            if let Ok(mut f) = f.lock() {
                let _ = writeln!(f, "{}", msg);
            }
        }
    }};
}

struct Args {
    landmarks_path: String,
    config_path: String,
    json: bool,
}

fn parse_args() -> Result<Args> {
    // Usage: talava-measure <landmarks.json> [--config path] [--json]
    let mut landmarks_path = None;
    let mut config_path = CONFIG_PATH.to_string();
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                config_path = args.next().context("--config requires a path")?;
            }
            _ if arg.starts_with("--") => bail!("unknown option: {}", arg),
            _ => landmarks_path = Some(arg),
        }
    }

    let Some(landmarks_path) = landmarks_path else {
        bail!("usage: talava-measure <landmarks.json> [--config path] [--json]");
    };
    Ok(Args { landmarks_path, config_path, json })
}

fn print_report(logfile: &Option<LogFile>, report: &BodyReport) {
    let m = &report.measurements;
    let p = &report.proportions;

    log!(logfile, "計測値:");
    log!(logfile, "  肩幅:       {:.3}", m.shoulder_width);
    log!(logfile, "  腰幅:       {:.3}", m.hip_width);
    log!(logfile, "  ウエスト幅: {:.3} (推定)", m.waist_width);
    log!(logfile, "  ウエスト位置: ({:.3}, {:.3})", m.waist_position.x, m.waist_position.y);
    log!(logfile, "  上半身長:   {:.3}", m.upper_body_length);
    log!(logfile, "  下半身長:   {:.3}", m.lower_body_length);
    log!(logfile, "  身長:       {:.3}", m.total_height);
    log!(logfile, "比率:");
    log!(logfile, "  SHR:        {:.3}", p.shr);
    log!(logfile, "  上下比:     {:.3}", p.upper_lower_ratio);
    log!(logfile, "  WHR:        {:.3} (推定)", p.estimated_waist_hip_ratio);

    match (&report.scale_ratio, &report.centimeters) {
        (Some(ratio), Some(cm)) => {
            log!(logfile, "cm換算 ({:.4} cm/px):", ratio);
            log!(logfile, "  肩幅:       {:.1} cm", cm.shoulder_width);
            log!(logfile, "  腰幅:       {:.1} cm", cm.hip_width);
            log!(logfile, "  ウエスト幅: {:.1} cm", cm.waist_width);
            log!(logfile, "  上半身長:   {:.1} cm", cm.upper_body_length);
            log!(logfile, "  下半身長:   {:.1} cm", cm.lower_body_length);
            log!(logfile, "  身長:       {:.1} cm", cm.total_height);
        }
        _ => log!(logfile, "cm換算: なし (scale.reference = \"none\")"),
    }
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let config = Config::load_or_default(&args.config_path);

    // JSON出力時は標準出力を汚さない
    let logfile = if args.json {
        None
    } else {
        match open_log_file() {
            Ok((f, _)) => Some(f),
            Err(e) => {
                eprintln!("Failed to open log file: {}", e);
                None
            }
        }
    };

    let pose = load_landmarks(&args.landmarks_path)?;
    let image_size = config.measure.image_size();
    let known = config.scale.known_scale();

    if !args.json {
        log!(logfile, "=== Talava Measure ({}) ===", env!("GIT_VERSION"));
        log!(logfile, "入力: {}", args.landmarks_path);
        log!(logfile, "画像サイズ: {}x{}", image_size.width, image_size.height);
        log!(logfile, "平均visibility: {:.3}", pose.average_visibility());
        log!(logfile, "");
    }

    // 標準エラーへの表示は main の戻り値に任せ、ログファイルにだけ残す
    let report = match measure_body(&pose, image_size, known) {
        Ok(report) => report,
        Err(e) => {
            if let Some(f) = logfile.as_ref() {
                if let Ok(mut f) = f.lock() {
                    let _ = writeln!(f, "計測失敗: {}", e);
                    let _ = f.flush();
                }
            }
            return Err(anyhow::Error::new(e).context("計測失敗"));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&logfile, &report);
    }

    if let Some(f) = logfile.as_ref() {
        if let Ok(mut f) = f.lock() {
            f.flush()?;
        }
    }
    Ok(())
}
