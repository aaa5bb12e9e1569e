use std::path::Path;

use modsplit::core::utils::{
    derive_output_dir, derive_package_name, to_pascal_case, to_snake_case, to_title_words,
};

#[test]
fn snake_case_normalizes_camel_spaces_and_hyphens() {
    assert_eq!(to_snake_case("DataStore"), "data_store");
    assert_eq!(to_snake_case("dataStore"), "data_store");
    assert_eq!(to_snake_case("data store"), "data_store");
    assert_eq!(to_snake_case("data-store"), "data_store");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
}

#[test]
fn pascal_case_round_trips_from_any_input_style() {
    assert_eq!(to_pascal_case("data_store"), "DataStore");
    assert_eq!(to_pascal_case("big file"), "BigFile");
    assert_eq!(to_pascal_case("DataStore"), "DataStore");
}

#[test]
fn title_words_replaces_underscores_and_capitalizes() {
    assert_eq!(to_title_words("data_store"), "Data Store");
    assert_eq!(to_title_words("alpha"), "Alpha");
}

#[test]
fn package_name_is_the_snake_cased_file_stem() {
    assert_eq!(derive_package_name(Path::new("/tmp/Big File.py")), "big_file");
    assert_eq!(derive_package_name(Path::new("app.py")), "app");
}

#[test]
fn output_dir_is_a_package_named_sibling_of_the_source() {
    assert_eq!(
        derive_output_dir(Path::new("/tmp/app.py"), None),
        Path::new("/tmp/app")
    );
    assert_eq!(
        derive_output_dir(Path::new("/tmp/app.py"), Some("pkg")),
        Path::new("/tmp/pkg")
    );
}
