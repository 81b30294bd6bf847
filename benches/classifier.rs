//! Benchmark for the experience classifier and a full survey trigger
//!
//! Resize events fire in bursts, so a single trigger should stay well
//! under a microsecond of classification work.

use browser_survey::presentation::{LinkElement, MemoryDocument};
use browser_survey::survey::{StaticEnvironment, SurveySession, Trigger, ViewportProbe};
use browser_survey::ExperienceClassifier;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const AGENTS: &[Option<&str>] = &[
    Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"),
    Some("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15"),
    Some("Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36"),
    Some("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0"),
    None,
];

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Elements(1));

    let classifier = ExperienceClassifier::new();

    group.bench_function("classify_mixed_agents", |b| {
        let mut counter = 0usize;
        b.iter(|| {
            counter += 1;
            let ua = AGENTS[counter % AGENTS.len()];
            let width = Some((counter % 2000) as u32);
            classifier.classify(black_box(ua), black_box(width))
        });
    });

    group.finish();
}

fn bench_resize_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("survey");
    group.throughput(Throughput::Elements(100));

    group.bench_function("resize_burst_100", |b| {
        let env = StaticEnvironment::new(AGENTS[2].map(String::from), ViewportProbe::client(800));
        let mut session = SurveySession::new(env);
        let mut doc = MemoryDocument::with_links(
            "page",
            vec![LinkElement::new("/site.css")
                .with_attribute("data-href-phone", "/site-phone.css")
                .with_attribute("data-href-tablet", "/site-tablet.css")],
        );

        b.iter(|| {
            for i in 0..100u32 {
                session.environment_mut().viewport = ViewportProbe::client(300 + i * 10);
                black_box(session.handle(Trigger::Resize, &mut doc));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_resize_burst);
criterion_main!(benches);
