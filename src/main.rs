//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{info, warn};

use chatlens::ChatlensError;
use chatlens::cli::{Args, LogLevel, ReportFormat};
use chatlens::export::{report_to_json, write_records_csv};
use chatlens::parser::TranscriptParser;
use chatlens::report::ChatReport;
use chatlens::resources::StopWords;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_filter_string()));
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if let Err(e) = tracing_subscriber::registry().with(filter).with(layer).try_init() {
        eprintln!("logger already initialized: {e}");
    }
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let filter = args.user_filter()?;
    let config = args.analysis_config();

    let parser = TranscriptParser::with_config(args.parser_config());
    let text = std::fs::read_to_string(&args.input)?;
    let outcome = parser.parse_with_report(&text)?;
    info!(
        records = outcome.records.len(),
        skipped = outcome.skipped(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parsed transcript"
    );

    if let Some(ref path) = args.records_csv {
        write_records_csv(&outcome.records, path)?;
        info!(path = %path.display(), "wrote records");
    }

    let stop_words = load_stop_words(args)?;
    let report = ChatReport::build(&outcome.records, &filter, stop_words.as_deref(), &config);

    match args.format {
        ReportFormat::Json => println!("{}", report_to_json(&report)?),
        ReportFormat::Text => print_report(args, &report, outcome.skipped(), start.elapsed().as_secs_f64()),
    }

    Ok(())
}

/// A missing list only disables the word tables.
fn load_stop_words(args: &Args) -> Result<Option<Arc<StopWords>>, ChatlensError> {
    match StopWords::shared(&args.stop_words) {
        Ok(words) => Ok(Some(words)),
        Err(e) if e.is_missing_resource() => {
            warn!("{e}; skipping common words and word cloud");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn print_report(args: &Args, report: &ChatReport, skipped: usize, seconds: f64) {
    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("👤 User:    {}", report.user);
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    if let Some(ref path) = args.records_csv {
        println!("💾 Records: {}", path.display());
    }
    if skipped > 0 {
        println!("⚠️  Skipped: {} blocks with unreadable timestamps", skipped);
    }

    let stats = &report.stats;
    println!();
    println!("📊 Top Statistics:");
    println!("   Messages:  {}", stats.messages);
    println!("   Words:     {}", stats.words);
    println!("   Media:     {}", stats.media);
    println!("   Links:     {}", stats.links);

    if stats.messages == 0 {
        println!();
        println!("No messages matched.");
        return;
    }

    println!();
    println!("🗓️  Monthly Timeline:");
    for month in &report.monthly_timeline {
        println!("   {:<16} {}", month.label, month.messages);
    }

    println!();
    println!("📆 Daily Timeline: {} active days", report.daily_timeline.len());
    if let Some(busiest) = report.daily_timeline.iter().max_by_key(|d| d.messages) {
        println!("   Busiest day: {} ({} messages)", busiest.date, busiest.messages);
    }

    println!();
    println!("📈 Activity Map:");
    println!("   Most busy day:   {}", labels(&report.week_activity));
    println!("   Most busy month: {}", labels(&report.month_activity));

    println!();
    println!("🔥 Weekly Heatmap:");
    print!("   {:<10}", "");
    for period in &report.heatmap.periods {
        print!(" {:>2}", &period[..2]);
    }
    println!();
    for (day, row) in report.heatmap.days.iter().zip(&report.heatmap.cells) {
        print!("   {:<10}", day);
        for count in row {
            print!(" {:>2}", count);
        }
        println!();
    }

    if let Some(ref busy) = report.busy_users {
        println!();
        println!("👥 Most Busy Users:");
        for user in &busy.top {
            println!("   {:<20} {}", user.name, user.messages);
        }
        for share in &busy.shares {
            println!("   {:<20} {:.2}%", share.name, share.percent);
        }
    }

    if let Some(ref words) = report.common_words {
        println!();
        println!("💬 Most Common Words:");
        for word in words {
            println!("   {:<20} {}", word.word, word.frequency);
        }
    }

    if !report.emojis.is_empty() {
        println!();
        println!("😀 Emoji Analysis:");
        for emoji in report.emojis.iter().take(10) {
            println!("   {}  {}", emoji.emoji, emoji.count);
        }
    }

    println!();
    println!("🙂 Sentiment Analysis:");
    for (sentiment, count) in report.sentiment.iter() {
        println!("   {:<9} {}", sentiment, count);
    }

    if let Some(ref length) = report.message_length {
        println!();
        println!("📏 Message Length:");
        println!("   Average:  {:.2} characters", length.average);
        println!("   Longest:  {}", length.longest.replace('\n', " "));
        println!("   Shortest: {}", length.shortest.replace('\n', " "));
    }

    println!();
    println!("⏰ Active Hours:");
    for hour in &report.active_hours {
        println!("   {:02}:00  {}", hour.hour, hour.messages);
    }

    println!();
    println!("⚡ Done in {:.2}s", seconds);
}

fn labels(counts: &[chatlens::analysis::ActivityCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{} ({})", c.label, c.messages))
        .collect::<Vec<_>>()
        .join(", ")
}
