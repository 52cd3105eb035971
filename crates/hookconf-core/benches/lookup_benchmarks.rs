use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hookconf_core::{ConfigDomain, Configuration, ConfigurationRegistry, SystemEnvironment, ini};
use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

struct BenchConfig;

impl ConfigDomain for BenchConfig {
    fn readme() -> &'static str {
        "[section_0]\nkey_0 = value_0"
    }
}

fn sample_ini(sections: usize, keys: usize) -> String {
    let mut content = String::new();
    for s in 0..sections {
        writeln!(content, "[section_{s}]").unwrap();
        for k in 0..keys {
            writeln!(content, "key_{k} = \"value_{s}_{k}, other\"").unwrap();
        }
    }
    content
}

fn ini_parse_benchmark(c: &mut Criterion) {
    let content = sample_ini(20, 20);
    c.bench_function("ini::parse (20x20)", |b| {
        b.iter(|| ini::parse(black_box(&content), Path::new("bench.conf"), true).unwrap())
    });
}

fn cached_lookup_benchmark(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bench.conf"), sample_ini(20, 20)).unwrap();
    let registry = Arc::new(ConfigurationRegistry::with_root(
        Arc::new(SystemEnvironment::new()),
        dir.path(),
    ));
    let config = Configuration::<BenchConfig>::load(&registry).unwrap();

    c.bench_function("Configuration::get_array (cached)", |b| {
        b.iter(|| {
            config
                .get_array(black_box("section_10"), black_box("key_10"), None, true)
                .unwrap()
        })
    });

    c.bench_function("Configuration::load (cache hit)", |b| {
        b.iter(|| Configuration::<BenchConfig>::load(black_box(&registry)).unwrap())
    });
}

criterion_group!(benches, ini_parse_benchmark, cached_lookup_benchmark);
criterion_main!(benches);
