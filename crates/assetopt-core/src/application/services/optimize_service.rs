//! Optimize Service - the run use case.
//!
//! One linear pass over the output directory:
//! 1. List every entry (the listing completes before any write)
//! 2. Skip entries the asset filter does not match
//! 3. Read, transform, overwrite
//! 4. Notify the reporter per file, then once on completion
//!
//! The first error aborts the run. Files rewritten before it stay rewritten.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProgressReporter},
    domain::{AssetFilter, FileOutcome, OptimizeReport, optimize_source},
    error::AssetoptResult,
};

/// Run options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Which entries are matched files.
    pub filter: AssetFilter,
    /// Transform and report, but never write.
    pub dry_run: bool,
}

/// Drives the transform pass over a build output directory.
pub struct OptimizeService {
    filesystem: Box<dyn Filesystem>,
    options: OptimizeOptions,
}

impl OptimizeService {
    pub fn new(filesystem: Box<dyn Filesystem>, options: OptimizeOptions) -> Self {
        Self {
            filesystem,
            options,
        }
    }

    /// Optimize every matched file directly inside `dir`.
    #[instrument(
        skip_all,
        fields(dir = %dir.display(), dry_run = self.options.dry_run)
    )]
    pub fn run(&self, dir: &Path, reporter: &dyn ProgressReporter) -> AssetoptResult<OptimizeReport> {
        let entries = self.filesystem.list_entries(dir)?;
        debug!(entries = entries.len(), filter = %self.options.filter, "Directory listed");

        let mut report = OptimizeReport::new(dir, self.options.dry_run);

        for path in entries {
            let name = entry_name(&path);
            if !self.options.filter.matches(&name) {
                debug!(file = %name, "Skipped");
                report.record_skipped();
                continue;
            }

            let original = self.filesystem.read_to_string(&path)?;
            let optimized = optimize_source(&original);

            if !self.options.dry_run {
                self.filesystem.write_file(&path, &optimized)?;
            }

            let outcome = FileOutcome::new(name, original.len(), optimized.len());
            debug!(
                file = %outcome.name,
                before = outcome.original_bytes,
                after = outcome.optimized_bytes,
                "Optimized"
            );
            reporter.file_optimized(&outcome);
            report.record(outcome);
        }

        info!(
            files = report.optimized_count(),
            skipped = report.skipped,
            bytes_saved = report.bytes_saved(),
            "Asset optimization complete"
        );
        reporter.finished(&report);

        Ok(report)
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockProgressReporter, NoopReporter},
    };
    use crate::error::{AssetoptError, ErrorCategory};

    fn dist() -> PathBuf {
        PathBuf::from("/dist")
    }

    fn listing(names: &'static [&'static str]) -> impl Fn(&Path) -> AssetoptResult<Vec<PathBuf>> {
        move |dir| Ok(names.iter().map(|n| dir.join(n)).collect())
    }

    fn service(fs: MockFilesystem) -> OptimizeService {
        OptimizeService::new(Box::new(fs), OptimizeOptions::default())
    }

    #[test]
    fn rewrites_matched_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries()
            .withf(|dir| dir == Path::new("/dist"))
            .times(1)
            .returning(listing(&["a.js"]));
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/dist/a.js"))
            .times(1)
            .returning(|_| Ok("// hi\nconst x = 1;\n".into()));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("/dist/a.js") && content == "const x = 1;")
            .times(1)
            .returning(|_, _| Ok(()));

        let report = service(fs).run(&dist(), &NoopReporter).unwrap();

        assert_eq!(report.files, vec![FileOutcome::new("a.js", 19, 12)]);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn unmatched_files_are_never_read() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries()
            .returning(listing(&["c.txt", "index.html", "app.js.map"]));
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let report = service(fs).run(&dist(), &NoopReporter).unwrap();

        assert_eq!(report.optimized_count(), 0);
        assert_eq!(report.skipped, 3);
    }

    #[test]
    fn unreadable_directory_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries().returning(|dir| {
            Err(ApplicationError::enumeration_failed(
                dir,
                &io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            )
            .into())
        });
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let mut reporter = MockProgressReporter::new();
        reporter.expect_file_optimized().never();
        reporter.expect_finished().never();

        let err = service(fs).run(&dist(), &reporter).unwrap_err();

        assert!(matches!(
            err,
            AssetoptError::Application(ApplicationError::EnumerationFailed { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn read_failure_stops_remaining_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries()
            .returning(listing(&["a.js", "b.js", "c.js"]));
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/dist/a.js"))
            .returning(|_| Ok("a();".into()));
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/dist/b.js"))
            .returning(|path| {
                Err(ApplicationError::read_failed(
                    path,
                    &io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
                )
                .into())
            });
        // a.js is already rewritten; c.js is never touched.
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/dist/a.js"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut reporter = MockProgressReporter::new();
        reporter.expect_file_optimized().times(1).return_const(());
        reporter.expect_finished().never();

        let err = service(fs).run(&dist(), &reporter).unwrap_err();

        assert!(err.to_string().starts_with("Failed to read /dist/b.js"));
    }

    #[test]
    fn write_failure_aborts_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries().returning(listing(&["a.css"]));
        fs.expect_read_to_string().returning(|_| Ok("a {}".into()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::write_failed(
                path,
                &io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            )
            .into())
        });

        let err = service(fs).run(&dist(), &NoopReporter).unwrap_err();

        assert_eq!(err.to_string(), "Failed to write /dist/a.css: Permission denied");
    }

    #[test]
    fn dry_run_never_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries().returning(listing(&["a.js", "b.css"]));
        fs.expect_read_to_string()
            .returning(|_| Ok("/* c */ x  =  1 ;".into()));
        fs.expect_write_file().never();

        let options = OptimizeOptions {
            dry_run: true,
            ..OptimizeOptions::default()
        };
        let report = OptimizeService::new(Box::new(fs), options)
            .run(&dist(), &NoopReporter)
            .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.optimized_count(), 2);
        assert_eq!(report.files[0].optimized_bytes, "x = 1 ;".len());
    }

    #[test]
    fn reporter_sees_each_file_then_completion() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries()
            .returning(listing(&["a.js", "notes.md", "b.css"]));
        fs.expect_read_to_string().returning(|_| Ok("x".into()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut seq = mockall::Sequence::new();
        let mut reporter = MockProgressReporter::new();
        reporter
            .expect_file_optimized()
            .withf(|o| o.name == "a.js")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        reporter
            .expect_file_optimized()
            .withf(|o| o.name == "b.css")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        reporter
            .expect_finished()
            .withf(|r| r.optimized_count() == 2 && r.skipped == 1)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        service(fs).run(&dist(), &reporter).unwrap();
    }

    #[test]
    fn custom_filter_selects_other_suffixes() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries()
            .returning(listing(&["a.js", "b.mjs"]));
        fs.expect_read_to_string()
            .withf(|path| path == Path::new("/dist/b.mjs"))
            .times(1)
            .returning(|_| Ok("m()".into()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let options = OptimizeOptions {
            filter: AssetFilter::new(["mjs"]).unwrap(),
            dry_run: false,
        };
        let report = OptimizeService::new(Box::new(fs), options)
            .run(&dist(), &NoopReporter)
            .unwrap();

        assert_eq!(report.files[0].name, "b.mjs");
        assert_eq!(report.skipped, 1);
    }
}
