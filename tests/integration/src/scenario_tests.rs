//! End-to-end mirroring scenarios
//!
//! Each test builds a source/replica pair, runs whole passes through the
//! Scheduler and checks both the replica tree and the sync log.

use mirror_core::{PruneMode, Scheduler, SyncConfig};
use mirror_test_utils::MirrorFixture;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::Duration;

fn scheduler(fx: &MirrorFixture) -> Scheduler {
    Scheduler::new(SyncConfig::new(
        fx.source(),
        fx.replica(),
        Duration::from_secs(1),
        fx.log_path(),
    ))
}

fn banner_lines(fx: &MirrorFixture) -> Vec<String> {
    fx.log_lines_starting_with("--- Sync completed at ")
}

#[test]
fn nested_source_into_empty_replica() {
    let fx = MirrorFixture::new();
    fx.write_source("a.txt", "hi");
    fx.write_source("sub/b.txt", "yo");
    fx.mkdir_replica("");

    scheduler(&fx).run_pass();

    fx.assert_replica_contains("a.txt", "hi");
    fx.assert_replica_contains("sub/b.txt", "yo");
    let src = fx.source();
    let dst = fx.replica();
    assert_eq!(
        fx.log_lines_starting_with("Copied "),
        vec![
            format!(
                "Copied {} to {}",
                src.join("a.txt").display(),
                dst.join("a.txt").display()
            ),
            format!(
                "Copied {} to {}",
                src.join("sub").join("b.txt").display(),
                dst.join("sub").join("b.txt").display()
            ),
        ]
    );
    assert_eq!(banner_lines(&fx).len(), 1);
}

#[test]
fn stale_file_is_deleted_and_survivor_recopied() {
    let fx = MirrorFixture::new();
    fx.write_source("a.txt", "fresh");
    fx.write_replica("a.txt", "old");
    fx.write_replica("stale.txt", "stale");

    scheduler(&fx).run_pass();

    fx.assert_replica_contains("a.txt", "fresh");
    fx.assert_replica_missing("stale.txt");
    assert_eq!(fx.log_lines_starting_with("Copied ").len(), 1);
    assert_eq!(
        fx.log_lines_starting_with("Deleted "),
        vec![format!("Deleted {}", fx.replica().join("stale.txt").display())]
    );
}

#[test]
fn non_empty_stale_directory_stays_unlogged() {
    let fx = MirrorFixture::new();
    fx.write_replica("oldsub/file.x", "x");

    let report = scheduler(&fx).run_pass();

    fx.assert_replica_exists("oldsub/file.x");
    assert!(fx.log_lines_starting_with("Deleted ").is_empty());
    assert_eq!(report.deleted, 0);
    assert_eq!(report.skip_count(), 1);
}

#[test]
fn second_pass_recopies_everything_and_adds_one_banner() {
    let fx = MirrorFixture::new();
    fx.write_source("a.txt", "hi");
    fx.write_source("sub/b.txt", "yo");
    let scheduler = scheduler(&fx);

    scheduler.run_pass();
    let after_first = MirrorFixture::snapshot(&fx.replica());
    scheduler.run_pass();

    assert_eq!(MirrorFixture::snapshot(&fx.replica()), after_first);
    assert_eq!(fx.log_lines_starting_with("Copied ").len(), 4);
    assert_eq!(banner_lines(&fx).len(), 2);
}

#[test]
fn missing_source_folder_empties_replica() {
    let fx = MirrorFixture::new();
    std::fs::remove_dir(fx.source()).unwrap();
    fx.write_replica("a.txt", "a");
    fx.write_replica("b.txt", "b");

    let report = scheduler(&fx).run_pass();

    assert_eq!(report.copied, 0);
    assert_eq!(report.deleted, 2);
    assert!(MirrorFixture::snapshot(&fx.replica()).is_empty());
    assert_eq!(banner_lines(&fx).len(), 1);
}

#[test]
fn banner_has_timestamp_and_trailing_blank_line() {
    let fx = MirrorFixture::new();

    scheduler(&fx).run_pass();

    let log = fx.log();
    assert!(log.ends_with(" ---\n\n"), "{log:?}");
    let banner = &banner_lines(&fx)[0];
    let stamp = banner
        .strip_prefix("--- Sync completed at ")
        .and_then(|rest| rest.strip_suffix(" ---"))
        .unwrap();
    assert_eq!(stamp.len(), "YYYY-MM-DD HH:MM:SS".len());
    let bytes = stamp.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match i {
            4 | 7 => assert_eq!(*b, b'-'),
            10 => assert_eq!(*b, b' '),
            13 | 16 => assert_eq!(*b, b':'),
            _ => assert!(b.is_ascii_digit(), "{stamp}"),
        }
    }
}

#[rstest]
#[case::single_entry(PruneMode::SingleEntry, true)]
#[case::recursive(PruneMode::Recursive, false)]
fn source_directory_removed_between_passes(#[case] mode: PruneMode, #[case] survives: bool) {
    let fx = MirrorFixture::new();
    fx.write_source("keep.txt", "k");
    fx.write_source("old/inner/f.txt", "f");
    let scheduler = Scheduler::new(
        SyncConfig::new(fx.source(), fx.replica(), Duration::ZERO, fx.log_path())
            .with_prune_mode(mode),
    );
    scheduler.run_pass();

    std::fs::remove_dir_all(fx.source().join("old")).unwrap();
    scheduler.run_pass();

    assert_eq!(fx.replica().join("old").exists(), survives);
    fx.assert_replica_contains("keep.txt", "k");
}

#[test]
fn run_while_drives_repeated_passes_picking_up_changes() {
    let fx = MirrorFixture::new();
    fx.write_source("a.txt", "v1");
    let scheduler = Scheduler::new(SyncConfig::new(
        fx.source(),
        fx.replica(),
        Duration::from_millis(1),
        fx.log_path(),
    ));
    let mut pass = 0;

    let passes = scheduler.run_while(|_| {
        pass += 1;
        if pass == 1 {
            fx.write_source("a.txt", "v2");
            fx.write_source("new.txt", "n");
        }
        pass < 2
    });

    assert_eq!(passes, 2);
    fx.assert_replica_contains("a.txt", "v2");
    fx.assert_replica_contains("new.txt", "n");
    assert_eq!(banner_lines(&fx).len(), 2);
}
