// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_dragbox::application::{DragBox, DragBoxOptions};
use iced_dragbox::domain::File;
use iced_dragbox::infrastructure::MemoryPreviewPort;
use iced_dragbox::ui::layout::Layout;
use std::hint::black_box;

fn batch(len: usize) -> Vec<File> {
    (0..len)
        .map(|i| {
            if i % 2 == 0 {
                File::new(format!("photo-{i}.png"), 4096 * i as u64, "image/png")
            } else {
                File::new(format!("notes-{i}.txt"), 17 * i as u64, "text/plain")
            }
        })
        .collect()
}

fn mounted() -> DragBox<MemoryPreviewPort> {
    DragBox::mount(
        &Layout::single("files"),
        "files".into(),
        DragBoxOptions::new(),
        MemoryPreviewPort::new(),
    )
    .expect("slot exists")
}

fn render_pass_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");

    for size in [1usize, 16, 128] {
        group.bench_function(format!("add_{size}_files"), |b| {
            b.iter_batched(
                || (mounted(), batch(size)),
                |(mut dragbox, files)| {
                    black_box(dragbox.add_files(files));
                    dragbox
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("remove_from_128", |b| {
        b.iter_batched(
            || {
                let mut dragbox = mounted();
                dragbox.add_files(batch(128));
                dragbox
            },
            |mut dragbox| {
                let _ = black_box(dragbox.remove_file(64));
                dragbox
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, render_pass_benchmark);
criterion_main!(benches);
