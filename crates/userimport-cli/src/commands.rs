use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{error, info, info_span};

use userimport_core::{ConvertOptions, CsvUserImportConverter, UserImportConverter, render_json};
use userimport_ingest::CsvOptions;
use userimport_mapping::load_filter_mapping;
use userimport_model::{ImportError, MatchingMode};

use crate::cli::{MappingArgs, PrepareArgs};
use crate::logging::redact_value;
use crate::prompt::confirm_overwrite;
use crate::summary::filters_table;

/// How a `prepare` run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareOutcome {
    /// The importable document was written.
    Written { target: PathBuf, users: usize },
    /// The target existed and overwriting was declined.
    Declined,
}

/// Run `prepare` against the process's stdin and stdout.
pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareOutcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_prepare_with(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Run `prepare`, reading the overwrite answer from `input` and writing
/// progress to `output`.
pub fn run_prepare_with<R, W>(
    args: &PrepareArgs,
    input: &mut R,
    output: &mut W,
) -> Result<PrepareOutcome>
where
    R: BufRead,
    W: Write,
{
    let span = info_span!(
        "prepare",
        source = %args.source.display(),
        target = %args.target.display()
    );
    let _guard = span.enter();

    if !args.source.exists() {
        bail!("Source file does not exist.");
    }
    if args.target.exists() && !args.yes && !confirm_overwrite(input, output)? {
        info!("overwrite declined");
        return Ok(PrepareOutcome::Declined);
    }

    writeln!(output, "Converting users to importable format...")?;
    let options = ConvertOptions {
        csv: CsvOptions::default().with_delimiter(args.delimiter),
        matching: if args.lenient {
            MatchingMode::Lenient
        } else {
            MatchingMode::Exact
        },
    };
    let converter = CsvUserImportConverter::new(args.mapping.sources()).with_options(options);
    let users = converter.convert_to_importable_format(&args.source)?;

    writeln!(output, "Saving importable file...")?;
    let json = render_json(&users).context("serialize importable users")?;
    fs::write(&args.target, json)
        .with_context(|| format!("write importable file {}", args.target.display()))?;

    info!(users = users.len(), "importable file saved");
    Ok(PrepareOutcome::Written {
        target: args.target.clone(),
        users: users.len(),
    })
}

/// Print the filters of the reference mapping.
pub fn run_filters(args: &MappingArgs) -> Result<()> {
    let sources = args.sources();
    let filters = load_filter_mapping(&sources, MatchingMode::Exact)
        .with_context(|| format!("load filter mapping {}", sources.filter_path.display()))?;
    println!("{}", filters_table(&filters));
    Ok(())
}

/// Log a failed command. Emails and source values stay out of the log unless
/// data logging is enabled.
pub fn log_failure(err: &anyhow::Error) {
    match err.downcast_ref::<ImportError>() {
        Some(ImportError::UnresolvedEmail { email, line }) => {
            error!(line, email = redact_value(email), "no ID found for email");
        }
        Some(ImportError::UnresolvedFilterValue {
            filter,
            value,
            line,
        }) => {
            error!(
                line,
                filter = %filter,
                value = redact_value(value),
                "no ID found for filter value"
            );
        }
        Some(ImportError::CsvParse { path, message }) => {
            error!(
                path = %path.display(),
                message = redact_value(message),
                "failed to parse source file"
            );
        }
        Some(ImportError::MappingFormat { path, reason }) => {
            error!(
                path = %path.display(),
                reason = redact_value(reason),
                "invalid mapping file"
            );
        }
        _ => {
            let message = format!("{err:#}");
            error!(error = %message, "command failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logged(err: &anyhow::Error) -> String {
        let writer = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || log_failure(err));
        let bytes = writer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn csv_parse_message_is_redacted() {
        let err = anyhow::Error::new(ImportError::CsvParse {
            path: PathBuf::from("users.csv"),
            message: "bad field near john.doe@mail.com".to_string(),
        });
        let output = logged(&err);
        assert!(output.contains("failed to parse source file"));
        assert!(output.contains("users.csv"));
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("john.doe@mail.com"));
    }

    #[test]
    fn mapping_format_reason_is_redacted() {
        let err = anyhow::Error::new(ImportError::MappingFormat {
            path: PathBuf::from("emails.json"),
            reason: "invalid type: string \"jane@mail.com\"".to_string(),
        })
        .context("load mappings");
        let output = logged(&err);
        assert!(output.contains("invalid mapping file"));
        assert!(!output.contains("jane@mail.com"));
    }

    #[test]
    fn unresolved_email_is_redacted() {
        let err = anyhow::Error::new(ImportError::UnresolvedEmail {
            email: "ghost@mail.com".to_string(),
            line: 4,
        });
        let output = logged(&err);
        assert!(output.contains("line=4"));
        assert!(!output.contains("ghost@mail.com"));
    }

    #[test]
    fn other_failures_are_logged_with_display_form() {
        let err = anyhow::anyhow!("Source file does not exist.");
        let output = logged(&err);
        assert!(output.contains("command failed"));
        assert!(output.contains("Source file does not exist."));
        assert!(!output.contains("Error {"));
    }
}
