use criterion::{Criterion, black_box, criterion_group, criterion_main};
use polyp::{Hierarchy, Pack};

fn build_hierarchy(leaves: usize) -> Hierarchy {
    let mut h = Hierarchy::new();
    for i in 0..leaves {
        h.add_child(Hierarchy::ROOT, ((i * 31) % 97 + 1) as f64);
    }
    h.sum();
    h
}

fn bench_pack(c: &mut Criterion) {
    for leaves in [100usize, 500, 2000] {
        c.bench_function(&format!("pack_flat_{leaves}"), |b| {
            b.iter(|| {
                let mut h = build_hierarchy(black_box(leaves));
                Pack::new().size(1024.0, 768.0).padding(20.0).layout(&mut h);
                black_box(h.circle(Hierarchy::ROOT))
            })
        });
    }
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
