//! Benchmarks for rank assignment and prize tier validation

use boundless_rewards_core::config::PrizeTier;
use boundless_rewards_core::place::{clear_cache, get_or_decode, parse_place};
use boundless_rewards_core::ranking::{apply_rank_change, plan_rank_assignment};
use boundless_rewards_core::submission::Submission;
use boundless_rewards_core::validation::validate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MAX_RANK: u32 = 10;

/// A judged hackathon: 500 submissions, the first ten ranked
fn create_submissions() -> Vec<Submission> {
    (0..500u32)
        .map(|i| {
            let mut s = Submission::new(format!("submission-{}", i));
            s.name = format!("Project {}", i);
            s.score = Some(f64::from(i % 100));
            if i % 3 == 0 {
                s.participant_id = Some(format!("team-{}", i));
            }
            if i < MAX_RANK {
                s.rank = Some(i + 1);
            }
            s
        })
        .collect()
}

fn create_tiers() -> Vec<PrizeTier> {
    vec![
        PrizeTier::new("1st"),
        PrizeTier::new("2nd"),
        PrizeTier::new("3rd"),
        PrizeTier::new("4th-10th"),
        PrizeTier::new("Fifth Place"),
    ]
}

fn benchmark_assign(c: &mut Criterion) {
    let submissions = create_submissions();

    c.bench_function("apply_rank_change_evict", |b| {
        b.iter(|| {
            black_box(apply_rank_change(
                black_box(&submissions),
                "submission-250",
                Some(3),
                MAX_RANK,
            ))
        })
    });

    c.bench_function("plan_rank_assignment", |b| {
        b.iter(|| {
            black_box(plan_rank_assignment(
                black_box(&submissions),
                "submission-250",
                Some(3),
                MAX_RANK,
            ))
        })
    });
}

fn benchmark_validation(c: &mut Criterion) {
    let submissions = create_submissions();
    let winners: Vec<_> = submissions.into_iter().filter(|s| s.rank.is_some()).collect();
    let tiers = create_tiers();

    c.bench_function("validate_prize_tiers", |b| {
        b.iter(|| black_box(validate(black_box(&winners), black_box(&tiers))))
    });
}

fn benchmark_place_parsing(c: &mut Criterion) {
    let places = ["1st", "2nd-3rd", "4th to 10th", "First Place", "Grand Prize"];

    c.bench_function("place_parsing_cold", |b| {
        b.iter(|| {
            for place in &places {
                let _ = black_box(parse_place(place));
            }
        })
    });

    c.bench_function("place_parsing_cached", |b| {
        clear_cache();
        for place in &places {
            let _ = get_or_decode(place);
        }

        b.iter(|| {
            for place in &places {
                let _ = black_box(get_or_decode(place));
            }
        })
    });
}

criterion_group!(benches, benchmark_assign, benchmark_validation, benchmark_place_parsing);
criterion_main!(benches);
