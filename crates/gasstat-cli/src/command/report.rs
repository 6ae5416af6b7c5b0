//! Statistics report over all benchmark sample files.
//!
//! For every category, in catalog order, each metric file is loaded, summarized
//! and printed as a block:
//!
//! ```text
//! <suffix>
//! Mean: <value>
//! Median: <value>
//! Standard Deviation: <value>
//! Variance: <value>
//! _____
//! ```
//!
//! The first file that cannot be loaded or summarized stops the report.

use std::{
    fmt,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use gasstat_stats::DescriptiveStats;

use crate::{
    catalog::{Category, CategoryKind, DEFAULT_EXTENSION, DEFAULT_SAMPLE_DIR, SampleLayout},
    sample::SampleSet,
    util::Output,
};

const SEPARATOR: &str = "_____";

/// A statistic rounded to two decimal places; NaN prints as `nan`.
struct Fixed2(f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Directory containing the sample files
    #[arg(long, default_value = DEFAULT_SAMPLE_DIR)]
    dir: PathBuf,
    /// Sample file extension, including the leading dot
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,
    /// Only report these categories (marketplace, product, bidirectionalchannel)
    #[arg(long = "category", value_name = "CATEGORY", value_delimiter = ',')]
    categories: Vec<CategoryKind>,
    /// Also print sample count, minimum and maximum
    #[arg(long)]
    extended: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_SAMPLE_DIR),
            extension: DEFAULT_EXTENSION.to_owned(),
            categories: vec![],
            extended: false,
            output: None,
        }
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        dir,
        extension,
        categories,
        extended,
        output,
    } = arg;

    let layout = SampleLayout::new(dir.clone(), extension.clone());
    let categories = select_categories(categories);
    log::info!(
        "reporting {} categories from {}",
        categories.len(),
        layout.dir.display()
    );

    let mut output = Output::from_output_path(output.clone())?;
    write_report(&mut output, &layout, &categories, *extended)?;
    let path = output.display_path();
    output.finish()?;
    log::info!("report written to {path}");

    Ok(())
}

/// Catalog categories matching `requested`, in report order.
///
/// An empty request selects every category.
fn select_categories(requested: &[CategoryKind]) -> Vec<CategoryKind> {
    CategoryKind::ALL
        .into_iter()
        .filter(|kind| requested.is_empty() || requested.contains(kind))
        .collect()
}

pub(crate) fn write_report<W>(
    writer: &mut W,
    layout: &SampleLayout,
    categories: &[CategoryKind],
    extended: bool,
) -> anyhow::Result<()>
where
    W: Write,
{
    for kind in categories {
        write_category(writer, layout, kind.category(), extended)?;
    }
    Ok(())
}

fn write_category<W>(
    writer: &mut W,
    layout: &SampleLayout,
    category: &Category,
    extended: bool,
) -> anyhow::Result<()>
where
    W: Write,
{
    writeln!(writer, "{SEPARATOR}\n")?;
    writeln!(writer, "{}", category.name)?;
    writeln!(writer, "{SEPARATOR}\n")?;

    for suffix in category.suffixes {
        let path = layout.sample_path(category, suffix);
        let samples = SampleSet::load(&path)
            .with_context(|| format!("Failed to load {} samples for {suffix}", category.name))?;
        let stats = DescriptiveStats::new(samples.values.iter().copied())
            .with_context(|| format!("Failed to summarize {}", samples.path.display()))?;
        log::debug!("{} {suffix}: {stats:?}", category.name);

        write_stats_block(writer, suffix, &stats, extended)?;
    }

    Ok(())
}

fn write_stats_block<W>(
    writer: &mut W,
    suffix: &str,
    stats: &DescriptiveStats,
    extended: bool,
) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{suffix}")?;
    writeln!(writer, "Mean: {}", Fixed2(stats.mean))?;
    writeln!(writer, "Median: {}", Fixed2(stats.median))?;
    writeln!(writer, "Standard Deviation: {}", Fixed2(stats.std_dev))?;
    writeln!(writer, "Variance: {}", Fixed2(stats.variance))?;
    if extended {
        writeln!(writer, "Count: {}", stats.count)?;
        writeln!(writer, "Min: {}", Fixed2(stats.min))?;
        writeln!(writer, "Max: {}", Fixed2(stats.max))?;
    }
    writeln!(writer, "{SEPARATOR}\n")
}
