//! domain_parts library: hostname decomposition against the Public Suffix List
//!
//! Splits hostnames into subdomain, registrable domain label, registrable
//! ("apex") domain and public suffix, e.g. `www.example.co.uk` into `www`,
//! `example`, `example.co.uk` and `co.uk`.
//!
//! Each input runs through three stages: normalization (one trailing `.`
//! removed, Unicode lowercasing), suffix resolution through an injected
//! [`SuffixResolver`], and decomposition around the suffix and apex. Inputs
//! that fail at any stage produce a record with missing fields; a batch never
//! aborts because of one input.
//!
//! # Example
//!
//! ```
//! use domain_parts::{process, PslResolver};
//!
//! let resolver = PslResolver::new();
//! let records = process(&resolver, ["a.b.example.co.uk", "example.com."]);
//!
//! assert_eq!(records[0].subdomain(), Some("a.b"));
//! assert_eq!(records[0].domain(), Some("example"));
//! assert_eq!(records[0].apex(), Some("example.co.uk"));
//! assert_eq!(records[0].suffix(), Some("co.uk"));
//! assert_eq!(records[1].subdomain(), Some(""));
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod decompose;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod normalize;
pub mod pipeline;
pub mod resolver;

// Re-export public API
pub use config::{Config, InputKind, LogFormat, LogLevel, Operation, OutputFormat};
pub use error_handling::{DecomposeError, NormalizeError, Outcome};
pub use pipeline::{
    apex_domains, extract, host_parts, process, process_parallel, public_suffix_flags,
    public_suffixes, DomainParts, DomainRecord, HostParts,
};
pub use resolver::{PslResolver, Resolution, SuffixResolver};
pub use run::{run_extract, RunReport};

// Internal run module (reads inputs, runs the batch, writes results)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use rayon::prelude::*;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::app::{log_progress, print_batch_statistics, print_simple_summary, read_inputs};
    use crate::config::{Config, Operation, LOGGING_INTERVAL, PARALLEL_THRESHOLD};
    use crate::error_handling::BatchStats;
    use crate::export::{export, Cell, ResultTable};
    use crate::initialization::init_resolver;
    use crate::pipeline::{
        apex_domains, host_parts, process, process_parallel, public_suffix_flags,
        public_suffixes, DomainRecord,
    };
    use crate::resolver::SuffixResolver;

    /// Results of a batch run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of inputs read (blank and comment lines excluded)
        pub total_inputs: usize,
        /// Inputs with a value in the result column
        pub resolved: usize,
        /// Where results were written (`None` for stdout)
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one batch with the provided configuration.
    ///
    /// Reads inputs from the configured file (or stdin), computes the
    /// configured operation for each, and writes one output row per input in
    /// input order.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be opened or read
    /// - The output cannot be created or written
    ///
    /// Individual inputs never cause an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use domain_parts::{run_extract, Config, Operation};
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     operation: Operation::Apex,
    ///     file: PathBuf::from("hosts.txt"),
    ///     output: Some(PathBuf::from("apex.csv")),
    ///     ..Default::default()
    /// };
    /// let report = run_extract(config)?;
    /// println!("{} of {} inputs resolved", report.resolved, report.total_inputs);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_extract(config: Config) -> Result<RunReport> {
        let start_time = Instant::now();

        let inputs = read_inputs(&config).context("Failed to read inputs")?;
        let resolver = init_resolver(&config);
        info!(
            "Running {:?} on {} inputs (unknown suffixes {})",
            config.operation,
            inputs.len(),
            if resolver.allows_unknown_suffixes() { "allowed" } else { "rejected" }
        );

        let table = match config.operation {
            Operation::Extract => {
                let records = extract_records(&*resolver, &inputs, config.parallel, start_time);
                ResultTable::from_records(&records)
            }
            Operation::Apex => {
                ResultTable::from_values("apex", &inputs, apex_domains(&*resolver, &inputs))
            }
            Operation::Suffix => {
                ResultTable::from_values("suffix", &inputs, public_suffixes(&*resolver, &inputs))
            }
            Operation::IsSuffix => ResultTable::from_values(
                "is_suffix",
                &inputs,
                public_suffix_flags(&*resolver, &inputs),
            ),
            Operation::Compat => ResultTable::from_host_parts(host_parts(&*resolver, &inputs)),
        };

        export(&table, config.format, config.output.as_deref())
            .context("Failed to write results")?;

        let resolved = table
            .rows()
            .iter()
            .filter(|row| !matches!(row.last(), Some(Cell::Missing) | None))
            .count();
        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_simple_summary(table.len(), resolved, elapsed_seconds);

        Ok(RunReport {
            total_inputs: table.len(),
            resolved,
            output: config.output,
            elapsed_seconds,
        })
    }

    /// Full decomposition in chunks, logging progress and outcome counts.
    fn extract_records<R>(
        resolver: &R,
        inputs: &[Vec<u8>],
        parallel: bool,
        start_time: Instant,
    ) -> Vec<DomainRecord>
    where
        R: SuffixResolver + ?Sized,
    {
        let parallel = parallel && inputs.len() >= PARALLEL_THRESHOLD;
        let stats = BatchStats::new();
        let mut records = Vec::with_capacity(inputs.len());

        for chunk in inputs.chunks(LOGGING_INTERVAL) {
            let batch = if parallel {
                let batch = process_parallel(resolver, chunk);
                batch.par_iter().for_each(|r| stats.record(r.outcome()));
                batch
            } else {
                let batch = process(resolver, chunk);
                batch.iter().for_each(|r| stats.record(r.outcome()));
                batch
            };
            records.extend(batch);
            if inputs.len() > LOGGING_INTERVAL {
                log_progress(start_time, records.len());
            }
        }

        print_batch_statistics(&stats);
        records
    }
}
