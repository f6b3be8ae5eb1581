use std::path::Path;

use bsf::config::BSFConfig;
use bsf::io;
use bsf::opt::bsf_packer::BSFPacker;
use bsf::opt::fit_rule::FitRule;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use truckpack::entities::{FreeRectPruning, Instance};
use truckpack::io::import;

criterion_main!(benches);
criterion_group!(benches, fit_rule_bench, pruning_bench);

const SCENARIO: &str = "../assets/pallets.json";

const FIT_RULES: [FitRule; 4] = [
    FitRule::BestShortSideFit,
    FitRule::BestLongSideFit,
    FitRule::BestAreaFit,
    FitRule::BottomLeft,
];

fn load_instance() -> Instance {
    let ext_scenario = io::read_scenario(Path::new(SCENARIO)).expect("could not read scenario");
    import::import(&ext_scenario).expect("could not import scenario")
}

/// Benchmark a complete packing run of the pallets scenario under every fit rule.
fn fit_rule_bench(c: &mut Criterion) {
    let instance = load_instance();

    let mut group = c.benchmark_group("pack_pallets");
    for fit_rule in FIT_RULES {
        let config = BSFConfig {
            fit_rule,
            ..BSFConfig::default()
        };
        group.bench_function(BenchmarkId::from_parameter(format!("{fit_rule:?}")), |b| {
            b.iter(|| BSFPacker::new(instance.clone(), config).solve())
        });
    }
    group.finish();
}

/// Benchmark the effect of pruning redundant free rectangles on the default fit rule.
fn pruning_bench(c: &mut Criterion) {
    let instance = load_instance();

    let mut group = c.benchmark_group("pack_pallets_pruning");
    for pruning in [
        FreeRectPruning::None,
        FreeRectPruning::Duplicates,
        FreeRectPruning::Contained,
    ] {
        let config = BSFConfig {
            free_rect_pruning: pruning,
            ..BSFConfig::default()
        };
        group.bench_function(BenchmarkId::from_parameter(format!("{pruning:?}")), |b| {
            b.iter(|| BSFPacker::new(instance.clone(), config).solve())
        });
    }
    group.finish();
}
