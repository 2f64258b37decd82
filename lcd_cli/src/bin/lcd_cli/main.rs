//! Main entry point for LcdCli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use lcd_cli::application::APP;

/// Boot LcdCli
fn main() {
    abscissa_core::boot(&APP);
}
