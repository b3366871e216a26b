//! Performance benchmarks for fbrowse

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fbrowse::test_utils::{MemoryFileSystem, TestTree};
use fbrowse::tree::sort_entries;
use fbrowse::{EntryKind, FileEntry, FileListing, ListingPolicy};
use std::path::PathBuf;

/// A tree of `dirs` directories, each holding `files` files and one hidden file.
fn memory_tree(dirs: usize, files: usize) -> MemoryFileSystem {
    let mut fs = MemoryFileSystem::new();
    for d in 0..dirs {
        for f in 0..files {
            fs.add_file(format!("/bench/dir{:03}/file{:03}.txt", d, f));
        }
        fs.add_file(format!("/bench/dir{:03}/.hidden", d));
    }
    fs
}

fn unlimited() -> ListingPolicy {
    ListingPolicy {
        depth_limit: 0,
        ..Default::default()
    }
}

fn bench_reload(c: &mut Criterion) {
    let mut group = c.benchmark_group("reload");

    let fs = memory_tree(50, 20);
    let mut listing = FileListing::with_filesystem(&fs, "/bench", unlimited()).unwrap();
    group.bench_function("memory_1000_files", |b| {
        b.iter(|| {
            listing.reload();
            black_box(listing.len())
        })
    });

    let excluding = ListingPolicy {
        exclude_patterns: vec!["*5.txt".to_string(), "dir01*".to_string()],
        ..unlimited()
    };
    let mut listing = FileListing::with_filesystem(&fs, "/bench", excluding).unwrap();
    group.bench_function("memory_1000_files_excludes", |b| {
        b.iter(|| {
            listing.reload();
            black_box(listing.len())
        })
    });

    let tree = TestTree::new();
    for d in 0..20 {
        for f in 0..10 {
            tree.add_file(&format!("dir{:02}/file{:02}.txt", d, f));
        }
    }
    let mut listing = FileListing::initialize(tree.path(), unlimited()).unwrap();
    group.bench_function("disk_200_files", |b| {
        b.iter(|| {
            listing.reload();
            black_box(listing.len())
        })
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_entries");

    let entries: Vec<FileEntry> = (0..2000)
        .map(|i| {
            let kind = if i % 7 == 0 {
                EntryKind::Directory
            } else {
                EntryKind::RegularFile
            };
            let name = format!("entry{:05}", (i * 7919) % 2000);
            FileEntry::new(PathBuf::from(format!("/bench/{}", name)), name, kind, (i % 4) + 1)
        })
        .collect();

    for (label, policy) in [
        ("by_type", ListingPolicy::default()),
        (
            "by_depth",
            ListingPolicy {
                sort_by_depth: true,
                ..Default::default()
            },
        ),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut batch = entries.clone();
                sort_entries(&mut batch, &policy);
                black_box(batch)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reload, bench_sort);
criterion_main!(benches);
