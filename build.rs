//! Build script to install this repository's own git hooks via rhusky
fn main() {
    rhusky::Rhusky::new()
        .hooks_dir(".githooks")
        .skip_in_env("CI")
        .install()
        .ok();
}
