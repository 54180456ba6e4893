//! Tests for command-line parsing and grid export

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use truchet::TruchetError;
    use truchet::io::cli::{Cli, GridExporter};
    use truchet::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED_LABEL, DEFAULT_WIDTH};
    use truchet::io::export::ExportFormat;

    fn parse(args: &[&str]) -> Cli {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(error) => unreachable!("arguments must parse: {error}"),
        }
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = parse(&["truchet"]);

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert!(!cli.cross);
        assert_eq!(cli.seed, DEFAULT_SEED_LABEL);
        assert_eq!(cli.format, ExportFormat::Text);
        assert!(cli.output.is_none());
    }

    // Tests CLI parsing with every flag in short form
    // Verified by swapping the width and height short flags
    #[test]
    fn test_cli_parse_short_flags() {
        let cli = parse(&[
            "truchet", "-w", "4", "-H", "3", "-c", "-s", "ocean", "-f", "paths", "-o", "out.txt",
        ]);

        assert_eq!(cli.width, 4);
        assert_eq!(cli.height, 3);
        assert!(cli.cross);
        assert_eq!(cli.seed, "ocean");
        assert_eq!(cli.format, ExportFormat::Paths);
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out.txt")));
    }

    // Tests unknown formats are rejected by the parser
    // Verified by adding a catch-all format variant
    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["truchet", "--format", "svg"]).is_err());
    }

    // Tests oversized dimensions are rejected before generation
    // Verified by comparing with >= instead of >
    #[test]
    fn test_grid_config_limits() {
        let accepted = parse(&["truchet", "--width", "10000", "--height", "1"]);
        assert!(accepted.grid_config().is_ok());

        let rejected = parse(&["truchet", "--height", "10001"]);
        match rejected.grid_config() {
            Err(TruchetError::InvalidParameter {
                parameter, value, ..
            }) => {
                assert_eq!(parameter, "height");
                assert_eq!(value, "10001");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests the same seed label always yields the same grid
    // Verified by seeding from the system clock
    #[test]
    fn test_build_is_deterministic_per_seed() {
        let build = |seed: &str| {
            GridExporter::new(parse(&["truchet", "-w", "6", "-H", "5", "-c", "-s", seed]))
                .build()
                .map(|grid| grid.tiles().to_vec())
                .ok()
        };

        assert!(build("coral").is_some());
        assert_eq!(build("coral"), build("coral"));
        assert_ne!(build("coral"), build("kelp"));
    }

    // Tests output is written into nested directories that do not exist yet
    // Verified by removing directory creation
    #[test]
    fn test_process_writes_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be available");
        };
        let target = dir.path().join("nested").join("grid.txt");
        let target_arg = target.to_string_lossy().to_string();

        let cli = parse(&["truchet", "-w", "2", "-H", "2", "-o", &target_arg]);
        assert!(GridExporter::new(cli).process().is_ok());

        let Ok(written) = fs::read_to_string(&target) else {
            unreachable!("output file must exist");
        };
        let mut lines = written.lines();
        assert_eq!(
            lines.next().map(|line| line.starts_with("# truchet 2x2 cross=false")),
            Some(true)
        );
        assert_eq!(lines.next(), Some("x y orientation first second"));
        assert_eq!(lines.count(), 4);
        assert!(written.ends_with('\n'));
    }

    // Tests invalid dimensions stop processing before any file is written
    // Verified by writing before validation
    #[test]
    fn test_process_rejects_before_writing() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be available");
        };
        let target = dir.path().join("grid.json");
        let target_arg = target.to_string_lossy().to_string();

        let cli = parse(&["truchet", "-w", "20000", "-f", "json", "-o", &target_arg]);
        assert!(GridExporter::new(cli).process().is_err());
        assert!(!target.exists());
    }
}
