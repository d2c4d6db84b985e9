//! The nbpandoc command-line executable.

fn main() -> anyhow::Result<()> {
    nbpandoc::run()
}
