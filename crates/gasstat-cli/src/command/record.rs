use std::path::PathBuf;

use anyhow::Context;

use crate::{
    catalog::{CategoryKind, DEFAULT_EXTENSION, DEFAULT_SAMPLE_DIR, SampleLayout},
    sample,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown metric {suffix:?} for category {category}")]
pub(crate) struct UnknownSuffixError {
    category: &'static str,
    suffix: String,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RecordArg {
    /// Benchmark category (marketplace, product, bidirectionalchannel)
    category: CategoryKind,
    /// Metric suffix within the category, e.g. `buy_product_gas_used`
    suffix: String,
    /// Measured value
    #[arg(allow_negative_numbers = true)]
    value: f64,
    /// Directory containing the sample files
    #[arg(long, default_value = DEFAULT_SAMPLE_DIR)]
    dir: PathBuf,
    /// Sample file extension, including the leading dot
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,
}

pub(crate) fn run(arg: &RecordArg) -> anyhow::Result<()> {
    let RecordArg {
        category,
        suffix,
        value,
        dir,
        extension,
    } = arg;

    let layout = SampleLayout::new(dir.clone(), extension.clone());
    let path = record_sample(&layout, *category, suffix, *value)?;
    log::info!("recorded {value} to {}", path.display());

    Ok(())
}

fn record_sample(
    layout: &SampleLayout,
    kind: CategoryKind,
    suffix: &str,
    value: f64,
) -> anyhow::Result<PathBuf> {
    let category = kind.category();
    if !category.has_suffix(suffix) {
        return Err(UnknownSuffixError {
            category: category.name,
            suffix: suffix.to_owned(),
        }
        .into());
    }

    let path = layout.sample_path(category, suffix);
    sample::append_sample(&path, value)
        .with_context(|| format!("Failed to append sample to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::sample::SampleSet;

    #[test]
    fn test_record_appends_to_metric_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = SampleLayout::new(dir.path().join("statistics"), ".txt");

        let path = record_sample(&layout, CategoryKind::Product, "owner_gas_used", 23_512.0)
            .unwrap();
        record_sample(&layout, CategoryKind::Product, "owner_gas_used", 23_498.0).unwrap();

        assert_eq!(
            path,
            dir.path()
                .join("statistics")
                .join("product_test_owner_gas_used.txt")
        );
        let samples = SampleSet::load(&path).unwrap();
        assert_eq!(samples.values, [23_512.0, 23_498.0]);
    }

    #[test]
    fn test_record_rejects_unknown_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let layout = SampleLayout::new(dir.path(), ".txt");

        let err = record_sample(
            &layout,
            CategoryKind::Marketplace,
            "owner_gas_used",
            1.0,
        )
        .unwrap_err();

        assert!(err.downcast_ref::<UnknownSuffixError>().is_some());
        assert_eq!(
            err.to_string(),
            "unknown metric \"owner_gas_used\" for category marketplace_test"
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
