// testrun: run pre-built test executables, stopping at the first failure.

use testrun::cli;

fn main() {
    cli::run();
}
