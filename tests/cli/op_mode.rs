// Integration tests for cli/op_mode.rs.

use lz77::cli::op_mode::{determine_op_mode, init_nb_workers_from, init_window_size_from, OpMode};
use lz77::config::NB_WORKERS_DEFAULT;

#[test]
fn mode_from_extension() {
    assert_eq!(determine_op_mode("a.lz77"), OpMode::Decompress);
    assert_eq!(determine_op_mode("dir/a.tar.lz77"), OpMode::Decompress);
    assert_eq!(determine_op_mode("a.LZ77"), OpMode::Compress);
    assert_eq!(determine_op_mode("a.lz7"), OpMode::Compress);
    assert_eq!(determine_op_mode(""), OpMode::Compress);
}

#[test]
fn window_environment_bounds() {
    assert_eq!(init_window_size_from(Some("1")), Some(1));
    assert_eq!(init_window_size_from(Some("65535")), Some(65_535));
    assert_eq!(init_window_size_from(Some("64K")), None);
    assert_eq!(init_window_size_from(Some("0")), None);
    assert_eq!(init_window_size_from(Some("4K extra")), None);
    assert_eq!(init_window_size_from(Some("")), None);
}

#[test]
fn workers_environment() {
    assert_eq!(init_nb_workers_from(None), NB_WORKERS_DEFAULT);
    assert_eq!(init_nb_workers_from(Some("6")), 6);
    assert_eq!(init_nb_workers_from(Some("0")), 0);
    assert_eq!(init_nb_workers_from(Some("lots")), NB_WORKERS_DEFAULT);
}
