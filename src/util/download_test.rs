use super::*;

// =============================================================
// download_file_name
// =============================================================

#[test]
fn strips_the_tmp_directory_prefix() {
    assert_eq!(download_file_name("/tmp/out_report.sql"), "out_report.sql");
}

#[test]
fn handles_nested_directories() {
    assert_eq!(
        download_file_name("/tmp/goat-2022-10-30-13-40-52-XEgcPB0.zip"),
        "goat-2022-10-30-13-40-52-XEgcPB0.zip"
    );
}

#[test]
fn bare_filename_passes_through() {
    assert_eq!(download_file_name("error.txt"), "error.txt");
}

#[test]
fn empty_or_trailing_slash_paths_yield_empty_name() {
    assert_eq!(download_file_name(""), "");
    assert_eq!(download_file_name("/tmp/"), "");
}
