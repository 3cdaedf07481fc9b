//! Benchmarks for the candidate filter pipeline
//!
//! Run with: cargo bench --package screening
//!
//! Benchmarks the standard four-filter pipeline over a synthetic roster.

use candidate_store::{Candidate, SeniorityBand, Skill, SkillLevel};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use screening::{FilterPipeline, ScreeningContext};

const LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "Rust",
    "Go",
    "SQL",
];

fn synthetic_roster(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| Candidate {
            username: format!("candidate_{:05}", i),
            joined_at: "2024-01-01".to_string(),
            skills: LANGUAGES
                .iter()
                .enumerate()
                .filter(|(j, _)| (i + j) % 3 == 0)
                .map(|(_, language)| Skill {
                    language: language.to_string(),
                    level: SkillLevel::Intermediate,
                })
                .collect(),
            score: 600 + ((i * 37) % 900) as u32,
        })
        .collect()
}

fn bench_standard_pipeline(c: &mut Criterion) {
    let roster = synthetic_roster(10_000);
    let pipeline = FilterPipeline::standard();

    let mut context = ScreeningContext::new();
    context.name_query = "candidate_0".to_string();
    context.seniority_bands.insert(SeniorityBand::Junior);
    context.seniority_bands.insert(SeniorityBand::Senior);
    context.languages.insert("python".to_string());

    c.bench_function("standard_pipeline_10k", |b| {
        b.iter(|| {
            let filtered = pipeline.apply(black_box(roster.clone()), black_box(&context));
            black_box(filtered)
        })
    });
}

fn bench_empty_context(c: &mut Criterion) {
    let roster = synthetic_roster(10_000);
    let pipeline = FilterPipeline::standard();
    let context = ScreeningContext::new();

    c.bench_function("pass_through_10k", |b| {
        b.iter(|| {
            let filtered = pipeline.apply(black_box(roster.clone()), black_box(&context));
            black_box(filtered)
        })
    });
}

criterion_group!(benches, bench_standard_pipeline, bench_empty_context);
criterion_main!(benches);
