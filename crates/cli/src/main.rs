use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use fluency_core::pipeline::analyze_transcript_use_case::{
    AnalyzeTranscriptUseCase, FluencyReport,
};
use fluency_core::shared::config::AnalysisConfig;

/// Speech-fluency analysis for timestamped transcripts.
#[derive(Parser)]
#[command(name = "fluency")]
struct Cli {
    /// Transcript file as copied from a captioning UI ("-" or omitted reads stdin).
    input: Option<PathBuf>,

    /// Filler words to count (comma-separated, exact match).
    #[arg(long, value_delimiter = ',')]
    fillers: Option<Vec<String>>,

    /// Rolling-pace window in segments.
    #[arg(long, default_value = "12")]
    window: usize,

    /// Emit the full report as JSON instead of the summary table.
    #[arg(long)]
    json: bool,

    /// Also print the N most frequent words.
    #[arg(long)]
    top_words: Option<usize>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let input = read_input(cli.input.as_deref())?;

    let mut config = AnalysisConfig::default();
    if let Some(fillers) = cli.fillers {
        config.filler_words = fillers;
    }
    config.rolling_window = cli.window;

    let analyzer = AnalyzeTranscriptUseCase::new(config)?;
    let report = analyzer.run(&input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);
    if let Some(n) = cli.top_words {
        print_top_words(&report, n);
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, std::io::Error> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_summary(report: &FluencyReport) {
    let s = &report.summary;
    println!("Total Duration:      {}", format_hms(s.total_duration_secs));
    println!("Speaking Duration:   {}", format_hms(s.clean_duration_secs));
    println!("Minutes:             {}", s.clean_duration_minutes);
    println!("Unique Words:        {}", s.vocabulary_size);
    println!("WPM:                 {}", format_wpm(s.pace_wpm));
    println!("Level:               {}", report.level_range);
    println!("Max WPM:             {}", format_wpm(s.max_rolling_wpm));
    println!("Min WPM:             {}", format_wpm(s.min_rolling_wpm));
    println!("Fillers Percentage:  {}", format_percent(s.filler_percent));
    println!("List of Fillers:     {}", report.filler_words.join(", "));
}

fn print_top_words(report: &FluencyReport, n: usize) {
    println!();
    println!("Top words:");
    for entry in report.word_frequency.iter().take(n) {
        println!("  {:<20} {}", entry.word, entry.count);
    }
}

fn format_hms(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

fn format_wpm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "N/A".to_string(),
    }
}

fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "0:00:00");
        assert_eq!(format_hms(59), "0:00:59");
        assert_eq!(format_hms(622), "0:10:22");
        assert_eq!(format_hms(3723), "1:02:03");
    }

    #[test]
    fn test_format_wpm_undefined_is_na() {
        assert_eq!(format_wpm(None), "N/A");
        assert_eq!(format_wpm(Some(123.456)), "123.5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(3.333)), "3.33%");
        assert_eq!(format_percent(None), "N/A");
    }
}
