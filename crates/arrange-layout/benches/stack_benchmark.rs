//! Stack distribution benchmarks.

use arrange_layout::{
    Arrangement, DimensionProposal, FrameLayout, HStackLayout, Layout, LayoutItem, PaddingLayout,
    Rectangle, Size, SizeProposal, VStackLayout,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct Spacer(i32);

impl LayoutItem for Spacer {
    fn priority(&self) -> i32 {
        self.0
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        let elastic = |dimension| match dimension {
            DimensionProposal::Fixed(value) => value,
            DimensionProposal::Expanded => f64::INFINITY,
            _ => 0.0,
        };
        Size::new(elastic(proposal.width), elastic(proposal.height))
    }
}

struct Fixed(Size);

impl LayoutItem for Fixed {
    fn intrinsic_size(&self) -> Size {
        self.0
    }

    fn size_that_fits(&self, _proposal: SizeProposal) -> Size {
        self.0
    }
}

fn mixed_row(count: usize) -> Vec<Box<dyn LayoutItem>> {
    (0..count)
        .map(|i| -> Box<dyn LayoutItem> {
            if i % 3 == 0 {
                Box::new(Spacer((i % 4) as i32 - 1))
            } else {
                Box::new(Fixed(Size::new(10.0 + i as f64, 20.0)))
            }
        })
        .collect()
}

fn stack_frames(c: &mut Criterion) {
    let bounds = Rectangle::new(0.0, 0.0, 2000.0, 100.0);
    for count in [8, 64] {
        let row = mixed_row(count);
        let items: Vec<&dyn LayoutItem> = row.iter().map(|item| item.as_ref()).collect();
        c.bench_function(&format!("hstack_frames_{count}"), |b| {
            b.iter(|| HStackLayout::new(4.0).frames(black_box(&items), black_box(bounds)))
        });
    }
}

fn nested_frames(c: &mut Criterion) {
    let mut column = Arrangement::new(VStackLayout::new(8.0));
    for _ in 0..16 {
        let mut row = Arrangement::new(HStackLayout::new(4.0));
        for item in mixed_row(6) {
            row.push(item);
        }
        let cell = Arrangement::new(FrameLayout::new().with_maximum_width(400.0)).with_item(row);
        column.push(Arrangement::new(PaddingLayout::uniform(4.0)).with_item(cell));
    }
    let bounds = Rectangle::new(0.0, 0.0, 800.0, 1200.0);
    c.bench_function("nested_frames", |b| b.iter(|| column.frames(black_box(bounds))));
}

criterion_group!(benches, stack_frames, nested_frames);
criterion_main!(benches);
