mod config;

use clap::{Parser, Subcommand};
use std::io::Read;
use std::sync::Arc;
use url::Url;
use warden_core::{ScoreWeights, Verdict};
use warden_detect::scoring;
use warden_vision::{ImageScanner, TesseractOcr};

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Heuristic code detection for gated chat channels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Text {
        #[arg(help = "Message to classify; reads stdin when omitted")]
        message: Option<String>,
        #[arg(short, long, help = "Read the message from a file instead")]
        file: Option<String>,
        #[arg(long, help = "Path to a TOML tuning override")]
        tuning: Option<String>,
        #[arg(long, help = "Emit the report as JSON")]
        json: bool,
    },
    Image {
        #[arg(help = "Image URL to fetch and scan")]
        url: String,
        #[arg(long, default_value = "tesseract", help = "OCR command to invoke")]
        tesseract: String,
        #[arg(long, help = "Emit the report as JSON")]
        json: bool,
    },
    Sample,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warden=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text {
            message,
            file,
            tuning,
            json,
        } => run_text(message, file, tuning, json),
        Commands::Image {
            url,
            tesseract,
            json,
        } => run_image(url, tesseract, json).await,
        Commands::Sample => run_sample(),
    };

    match result {
        Ok(exit) => std::process::exit(exit),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_text(
    message: Option<String>,
    file: Option<String>,
    tuning: Option<String>,
    json: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let text = match (message, file) {
        (Some(m), _) => m,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let weights = match tuning {
        Some(path) => config::TuningFile::from_file(&path)?.weights(),
        None => ScoreWeights::default(),
    };

    let scores = scoring::score_text(&text);
    let total = scores.total(&weights);
    let is_code = scoring::classify_with(&text, &weights);
    let verdict = Verdict::from_code_flag(is_code);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "scores": scores,
                "total": total,
                "threshold": weights.threshold,
                "verdict": verdict,
            })
        );
    } else {
        println!("--- text scan ---");
        println!("keyword:   {:.2}", scores.keyword);
        println!("structure: {:.2}", scores.structure);
        println!("syntax:    {:.2}", scores.syntax);
        println!("context:   {:+.2}", scores.context);
        println!("total:     {:.2} (threshold {:.2})", total, weights.threshold);
        println!("verdict:   {:?}", verdict);
    }

    Ok(if is_code { 2 } else { 0 })
}

async fn run_image(
    url: String,
    tesseract: String,
    json: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let url = Url::parse(&url)?;
    let scanner = ImageScanner::new(Arc::new(TesseractOcr::new(tesseract)));

    let verdict = scanner.classify_image(&url).await;

    if json {
        println!(
            "{}",
            serde_json::json!({ "url": url.as_str(), "verdict": verdict })
        );
    } else {
        println!("--- image scan for {} ---", url);
        println!("verdict: {:?}", verdict);
    }

    Ok(match verdict {
        Verdict::CodeDetected => 2,
        Verdict::Indeterminate => 3,
        Verdict::NoCodeDetected => 0,
    })
}

const SAMPLES: &[(&str, &str)] = &[
    (
        "prose with control words",
        "If you want to pass the assignment, else you might fail the class. Please help me understand this problem.",
    ),
    (
        "homework plea",
        "The professor said if we don't submit on time, then we get a penalty. I need help with my homework assignment.",
    ),
    (
        "python function",
        "def calculate_grade(score):\n    if score >= 90:\n        return 'A'\n    else:\n        return 'B'",
    ),
    (
        "javascript loop",
        "for (int i = 0; i < n; i++) {\n    console.log(arr[i]);\n    sum += arr[i];\n}",
    ),
    (
        "java class",
        "public class HelloWorld {\n    public static void main(String[] args) {\n        System.out.println(\"Hello\");\n    }\n}",
    ),
    (
        "assignment run",
        "x = 5;\ny = 10;\nz = x + y;",
    ),
    (
        "prose about code",
        "The function should return true if the condition is met, else it returns false.",
    ),
    (
        "one-line javascript",
        "let x = 5; const y = 10; console.log(x + y);",
    ),
];

fn run_sample() -> Result<i32, Box<dyn std::error::Error>> {
    let weights = ScoreWeights::default();

    println!("--- sample sweep ({} snippets) ---", SAMPLES.len());
    for (label, text) in SAMPLES {
        let scores = scoring::score_text(text);
        let total = scores.total(&weights);
        let marker = if scoring::classify_text(text) { "!" } else { "ok" };
        println!(
            "  [{:>2}] {:<24} kw={:.2} st={:.2} sy={:.2} cx={:+.2} total={:.2}",
            marker, label, scores.keyword, scores.structure, scores.syntax, scores.context, total
        );
    }
    Ok(0)
}
