use std::process::ExitCode;
use std::sync::Arc;

use array_methods::demos::{DemoOptions, DemoRunner};
use array_methods::report::StdOutReporter;

fn main() -> ExitCode {
    let opts = DemoOptions::default();
    let reporter = Arc::new(StdOutReporter::new(opts.output_style));
    let runner = DemoRunner::new(opts).with_reporter(reporter);

    match runner.run_all() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
