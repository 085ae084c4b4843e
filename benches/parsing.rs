//! Benchmarks for export parsing and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- export_parsing`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tgarchive::config::ParserConfig;
use tgarchive::core::output::{to_csv, to_json, to_jsonl};
use tgarchive::core::{ExportStats, FilterConfig, OutputConfig, apply_filters};
use tgarchive::parser::ExportParser;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Builds an export page with a realistic mix of containers: date
/// separators, joined messages, replies, reactions and attachments.
fn generate_export_html(count: usize) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"/></head><body><div class="page_wrap">
<div class="page_header"><div class="content"><div class="text bold">Bob</div></div></div>
<div class="page_body chat_page"><div class="history">"#,
    );

    for i in 0..count {
        let day = i / 500 + 1;
        let (hour, minute) = ((i / 60) % 24, i % 60);
        let date = format!("{:02}.06.2023 {hour:02}:{minute:02}:00 UTC+03:00", day % 28 + 1);

        if i % 500 == 0 {
            html.push_str(&format!(
                r#"<div class="message service" id="message-{day}"><div class="body details">{day} June 2023</div></div>"#
            ));
        }

        let joined = i % 3 == 2;
        html.push_str(&format!(
            r#"<div class="message default clearfix{}" id="message{i}"><div class="body">
<div class="pull_right date details" title="{date}">{hour:02}:{minute:02}</div>"#,
            if joined { " joined" } else { "" }
        ));
        if !joined {
            let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
            html.push_str(&format!(r#"<div class="from_name">{sender}</div>"#));
        }
        if i % 10 == 0 && i > 0 {
            html.push_str(&format!(
                r##"<div class="reply_to details">In reply to <a href="#go_to_message{0}" onclick="return GoToMessage({0})">this message</a></div>"##,
                i - 1
            ));
        }
        match i % 7 {
            0 => html.push_str(&format!(
                r#"<div class="media_wrap clearfix"><a class="photo_wrap clearfix pull_left" href="photos/photo_{i}.jpg"><img class="photo" src="photos/photo_{i}_thumb.jpg" width="260" height="195"/></a></div>"#
            )),
            3 => html.push_str(&format!(
                r#"<div class="media_wrap clearfix"><a class="media_clip media_document" href="files/file_{i}.pdf"><div class="body"><div class="file_size">{i} KB</div><div class="mime_type">application/pdf</div></div></a></div>"#
            )),
            _ => {}
        }
        html.push_str(&format!(
            r#"<div class="text">Message number {i}<br>with a second line</div>"#
        ));
        if i % 4 == 0 {
            html.push_str(
                r#"<span class="reactions"><span class="reaction"><span class="emoji">👍</span><span class="count">2</span></span></span>"#,
            );
        }
        html.push_str("</div></div>\n");
    }

    html.push_str("</div></div></div></body></html>");
    html
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_export_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_parsing");
    let parser = ExportParser::with_config(ParserConfig::new().with_self_name("Alice"));

    for size in [100_usize, 1_000, 10_000] {
        let html = generate_export_html(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &html, |b, html| {
            b.iter(|| {
                let messages = parser.parse_str(black_box(html));
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_parse_export_header(c: &mut Criterion) {
    let parser = ExportParser::new();
    let html = generate_export_html(1_000);

    c.bench_function("parse_export_1000", |b| {
        b.iter(|| black_box(parser.parse_export(black_box(&html))));
    });
}

// =============================================================================
// Processing Benchmarks
// =============================================================================

fn bench_filter_and_stats(c: &mut Criterion) {
    let messages = ExportParser::new().parse_str(&generate_export_html(10_000));
    let filter = FilterConfig::new()
        .with_date_from("2023-06-05")
        .and_then(|f| f.with_date_to("2023-06-15"))
        .map(|f| f.with_sender("Alice"))
        .unwrap();

    c.bench_function("filter_10000", |b| {
        b.iter(|| black_box(apply_filters(black_box(messages.clone()), &filter)));
    });

    c.bench_function("stats_10000", |b| {
        b.iter(|| black_box(ExportStats::from_messages(black_box(&messages))));
    });
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let messages = ExportParser::new().parse_str(&generate_export_html(1_000));
    let config = OutputConfig::all();

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&messages), &config).unwrap()));
    });
    group.bench_function("json", |b| {
        b.iter(|| black_box(to_json(black_box(&messages), &config).unwrap()));
    });
    group.bench_function("jsonl", |b| {
        b.iter(|| black_box(to_jsonl(black_box(&messages), &config).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_export_parsing,
    bench_parse_export_header,
    bench_filter_and_stats,
    bench_output,
);

criterion_main!(benches);
