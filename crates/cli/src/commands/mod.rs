pub(crate) mod bump;
pub(crate) mod check;
pub(crate) mod compare;
pub(crate) mod diff;
pub(crate) mod next;

use std::process;

use serde_json::Value;

use crate::{report_error, OutputFormat};

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GlobalOpts {
    pub output: OutputFormat,
    pub quiet: bool,
    pub strict: bool,
}

/// Report `result`'s error and exit 1, or hand back the value.
pub(crate) fn or_exit<T>(result: Result<T, String>, opts: GlobalOpts) -> T {
    match result {
        Ok(v) => v,
        Err(msg) => {
            report_error(&msg, opts.output, opts.quiet);
            process::exit(1);
        }
    }
}

/// Print either the text or the JSON rendering, honouring `--quiet`.
pub(crate) fn emit(opts: GlobalOpts, text: impl FnOnce() -> String, json: impl FnOnce() -> Value) {
    if opts.quiet {
        return;
    }
    match opts.output {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json()).unwrap_or_default());
        }
    }
}
