use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;
use sumrace::gameroom::*;
use sumrace::players::*;
use sumrace::quiz::*;
use sumrace::scoring::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_question_draw,
        generating_question,
        evaluating_ranked_answer,
        simulating_full_round,
}

fn sampling_question_draw(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("draw one rejection-sampled puzzle", |b| {
        b.iter(|| Generator::draw(rng))
    });
}

fn generating_question(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let generator = Generator::default();
    let previous = generator.opening();
    c.bench_function("generate a question with a new title", |b| {
        b.iter(|| generator.generate(&previous, rng))
    });
}

fn evaluating_ranked_answer(c: &mut criterion::Criterion) {
    let question = Template::OCEAN.question();
    let roster = Roster::default();
    c.bench_function("evaluate a pair against the standings", |b| {
        b.iter(|| Evaluation::evaluate([1, 2], &question, &roster, 4))
    });
}

fn simulating_full_round(c: &mut criterion::Criterion) {
    c.bench_function("play one round without timers", |b| {
        b.iter(|| {
            let now = Instant::now();
            let mut engine = Engine::seeded(1);
            engine.handle(Command::Start, now);
            let round = engine.round();
            let bots = engine.roster().bots().collect::<Vec<_>>();
            for player in bots {
                engine.fire(Event::Answer { round, player }, now);
            }
            engine.snapshot()
        })
    });
}
