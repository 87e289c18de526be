use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use engagemeter_core::classification::classify_frame_use_case::ClassifyFrameUseCase;
use engagemeter_core::classification::verdict::Verdict;
use engagemeter_core::detection::domain::face_detector::FaceDetector;
use engagemeter_core::detection::infrastructure::model_resolver;
use engagemeter_core::detection::infrastructure::onnx_blazeface_detector::{
    OnnxBlazefaceDetector, DEFAULT_CONFIDENCE,
};
use engagemeter_core::shared::constants::{BLAZEFACE_MODEL_NAME, BLAZEFACE_MODEL_URL};

/// Classify a single webcam frame as Engaged or Neutral.
///
/// Reads one data-URI frame ("<metadata>,<base64>") from stdin and writes
/// one line of JSON to stdout. Failures surface as a Neutral verdict with
/// an "error" field; the exit code is 0 either way.
#[derive(Parser)]
#[command(name = "engagemeter")]
struct Cli {
    /// Face detection confidence threshold (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE)]
    confidence: f64,

    /// Load the BlazeFace model from a local file instead of the cache.
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let verdict = run().unwrap_or_else(|e| {
        log::error!("{e}");
        Verdict::failure(e.to_string())
    });
    println!("{}", verdict.to_json());
}

fn run() -> Result<Verdict, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let detector = build_detector(&cli)?;
    let mut use_case = ClassifyFrameUseCase::new(detector);
    Ok(use_case.execute(&input))
}

fn build_detector(cli: &Cli) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    let model_path = match &cli.model {
        Some(path) => {
            if !path.exists() {
                return Err(format!("Model file not found: {}", path.display()).into());
            }
            path.clone()
        }
        None => {
            log::info!("Resolving model: {BLAZEFACE_MODEL_NAME}");
            let path = model_resolver::resolve(
                BLAZEFACE_MODEL_NAME,
                BLAZEFACE_MODEL_URL,
                None,
                Some(Box::new(download_progress)),
            )?;
            eprintln!();
            path
        }
    };

    Ok(Box::new(OnnxBlazefaceDetector::new(
        &model_path,
        cli.confidence,
    )?))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
}
